use serde_json::json;
use ela_matrix::{MatTrait, Q};
use ela_matrix::dense::{rref, Mat};
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub input: Input,

    /// Also print the reduced row echelon form.
    #[arg(long)]
    pub show_rref: bool,

    #[arg(long, default_value = "text")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App {
    args: Args,
    buff: Buffer
}

impl App {
    pub fn new(args: Args) -> Self {
        App { args, buff: Buffer::default() }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let a: Mat<Q> = self.args.input.load()?;
        let res = rref(a);
        let (r, k) = (res.rank(), res.result().ncols() - res.rank());

        if self.args.format == Format::Json {
            return to_json(&json!({
                "rank": r,
                "nullity": k,
                "pivots": res.pivots(),
                "rref": rows_of(res.result())
            }))
        }

        self.buff.out(&format!("rank: {r}"));
        self.buff.out(&format!("nullity: {k}"));
        self.buff.out(&format!("pivots: {:?}", res.pivots()));

        if self.args.show_rref {
            self.buff.out("");
            self.buff.out(&mat2str(res.result(), None));
        }

        Ok(self.buff.flush())
    }
}

use serde_json::json;
use ela_matrix::{MatTrait, Q};
use ela_matrix::dense::{reduce_to_ref, Mat};
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub input: Input,

    /// Treat the last column as the right-hand side.
    #[arg(short, long)]
    pub augmented: bool,

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
        let res = reduce_to_ref(a);

        if self.args.format == Format::Json {
            return to_json(&json!({
                "ref": rows_of(res.result()),
                "pivots": res.pivots(),
                "rank": res.rank()
            }))
        }

        let sep = self.args.augmented.then(|| res.result().ncols().saturating_sub(1));

        self.buff.out(&mat2str(res.result(), sep));
        self.buff.out("");
        self.buff.out(&format!("pivots: {:?}", res.pivots()));
        self.buff.out(&format!("rank: {}", res.rank()));

        Ok(self.buff.flush())
    }
}

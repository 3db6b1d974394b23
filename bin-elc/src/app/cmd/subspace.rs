use serde_json::json;
use ela_matrix::Q;
use ela_matrix::dense::{Mat, Subspaces};
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub input: Input,

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
        let s = Subspaces::of(&a);

        if self.args.format == Format::Json {
            return to_json(&json!(s))
        }

        self.buff.out(&format!("rank: {}", s.rank));
        self.buff.out(&format!("nullity: {}", s.nullity));
        self.buff.out(&format!("pivots: {:?}", s.pivots));

        self.out_basis("Col(A)", &s.col_basis);
        self.out_basis("Row(A)", &s.row_basis);
        self.out_basis("Nul(A)", &s.null_basis);

        Ok(self.buff.flush())
    }

    fn out_basis(&mut self, name: &str, basis: &[Vec<Q>]) {
        self.buff.out("");
        if basis.is_empty() {
            self.buff.out(&format!("{name}: {{0}}"));
            return
        }

        self.buff.out(&format!("{name}: dim {}", basis.len()));
        for (i, v) in basis.iter().enumerate() {
            self.buff.out(&format!("  v{i} = {}", vec2str(v)));
        }
    }
}

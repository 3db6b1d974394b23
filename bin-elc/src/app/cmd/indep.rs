use serde_json::json;
use ela_matrix::Q;
use ela_matrix::dense::{rank, dependency, Mat};
use ela_matrix::MatTrait;
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    // the columns are the vectors to test.
    #[command(flatten)]
    pub input: Input,

    /// Take the rows as the vectors instead.
    #[arg(short, long)]
    pub rows: bool,

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
        let a = if self.args.rows { a.transpose() } else { a };

        let r = rank(&a);
        let k = a.ncols();
        let dep = dependency(&a);

        if self.args.format == Format::Json {
            return to_json(&json!({
                "rank": r,
                "vectors": k,
                "independent": dep.is_none(),
                "dependency": dep
            }))
        }

        self.buff.out(&format!("rank = {r}, vectors = {k}"));

        match dep {
            None => self.buff.out("linearly independent."),
            Some(c) => {
                self.buff.out("linearly dependent.");
                self.buff.out(&format!("nontrivial relation: c = {}", vec2str(&c)));
            }
        }

        Ok(self.buff.flush())
    }
}

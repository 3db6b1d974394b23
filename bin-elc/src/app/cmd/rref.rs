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
        let res = rref(a);

        if self.args.format == Format::Json {
            return to_json(&json!({
                "rref": rows_of(res.result()),
                "pivots": res.pivots(),
                "rank": res.rank()
            }))
        }

        let sep = self.args.augmented.then(|| res.result().ncols().saturating_sub(1));

        self.buff.out(&mat2str(res.result(), sep));
        self.buff.out("");
        self.buff.out(&format!("pivots: {:?}", res.pivots()));

        Ok(self.buff.flush())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(matrix: &str) -> Args {
        Args {
            input: Input { matrix: Some(matrix.to_string()), file: None },
            ..Default::default()
        }
    }

    #[test]
    fn text() {
        let res = dispatch(&args("2 1 1; 4 3 0")).unwrap();
        assert_eq!(res, "[ 1  0  3/2 ]\n[ 0  1   -2 ]\n\npivots: [0, 1]");
    }

    #[test]
    fn json() {
        let res = dispatch(&Args { format: Format::Json, ..args("1 2 3; 2 4 7") }).unwrap();
        let v: serde_json::Value = serde_json::from_str(&res).unwrap();

        assert_eq!(v["rref"], json!([["1", "2", "0"], ["0", "0", "1"]]));
        assert_eq!(v["pivots"], json!([0, 2]));
    }
}

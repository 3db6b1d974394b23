use log::info;
use ela_matrix::{MatTrait, Q};
use ela_matrix::dense::{least_squares, Mat};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub input: Input,

    /// Right-hand side.
    #[arg(short, long)]
    pub b: String,

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
        let b = parse_vector(&self.args.b)?;

        ensure!(b.len() == a.nrows(), "`b` must have {} entries, got {}.", a.nrows(), b.len());

        info!("A: {:?}", a.shape());

        let res = least_squares(&a, &b)?;

        if self.args.format == Format::Json {
            return to_json(&res)
        }

        self.buff.out(&solution2str(&res.solution, "x"));
        self.buff.out("");
        self.buff.out(&format!("residual: {}", vec2str(&res.residual)));
        self.buff.out(&format!("|residual|^2 = {}", res.residual_norm2));

        Ok(self.buff.flush())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(matrix: &str, b: &str) -> Args {
        Args {
            input: Input { matrix: Some(matrix.to_string()), file: None },
            b: b.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn overdetermined() {
        let res = dispatch(&args("1 0; 1 1; 1 2", "6 0 0")).unwrap();
        assert_eq!(res, "x0 = 5\nx1 = -3\n\nresidual: (1, -2, 1)\n|residual|^2 = 6");
    }

    #[test]
    fn exact_fit() {
        let res = dispatch(&args("1 0; 0 1; 1 1", "1 2 3")).unwrap();
        assert_eq!(res, "x0 = 1\nx1 = 2\n\nresidual: (0, 0, 0)\n|residual|^2 = 0");
    }

    #[test]
    fn rank_deficient() {
        let res = dispatch(&args("1 1; 1 1; 1 1", "1 2 3")).unwrap();
        assert!(res.starts_with("x0 = 2 - t0\nx1 = t0\nfree: t0 = x1"));
        assert!(res.ends_with("residual: (-1, 0, 1)\n|residual|^2 = 2"));
    }

    #[test]
    fn json() {
        let res = dispatch(&Args { format: Format::Json, ..args("1 0; 0 1; 1 1", "1 1 0") }).unwrap();
        let v: serde_json::Value = serde_json::from_str(&res).unwrap();

        assert_eq!(v["solution"]["status"], json!("solved"));
        assert_eq!(v["solution"]["solution"], json!(["1/3", "1/3"]));
        assert_eq!(v["residual"], json!(["2/3", "2/3", "-2/3"]));
        assert_eq!(v["residual_norm2"], json!("4/3"));
    }

    #[test]
    fn wrong_length() {
        let res = dispatch(&args("1 0; 0 1; 1 1", "1 2"));
        assert_eq!(res.unwrap_err().to_string(), "`b` must have 3 entries, got 2.");
    }
}

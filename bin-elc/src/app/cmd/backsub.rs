use serde_json::json;
use ela_matrix::{MatTrait, Q};
use ela_matrix::dense::{back_substitute, Mat};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    // the augmented matrix `[A | b]`, preferably in echelon form.
    #[command(flatten)]
    pub input: Input,

    /// Number of unknowns. Defaults to all but the last column.
    #[arg(short, long)]
    pub n_vars: Option<usize>,

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

        ensure!(a.ncols() >= 2, "augmented matrix needs at least 2 columns, got {}.", a.ncols());

        let n_vars = self.args.n_vars.unwrap_or(a.ncols() - 1);
        let sol = back_substitute(&a, n_vars)?;

        if self.args.format == Format::Json {
            return to_json(&json!(sol))
        }

        self.buff.out(&solution2str(&sol, "x"));

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
    fn unique() {
        let res = dispatch(&args("2 0 4; 0 3 9")).unwrap();
        assert_eq!(res, "x0 = 2\nx1 = 3");
    }

    #[test]
    fn free() {
        let res = dispatch(&args("1 2 -1 3; 0 0 2 4")).unwrap();
        assert_eq!(res, "x0 = 5 - 2t0\nx1 = t0\nx2 = 2\nfree: t0 = x1");
    }

    #[test]
    fn inconsistent() {
        let res = dispatch(&args("1 1 2; 0 0 5")).unwrap();
        assert_eq!(res, "no solution (inconsistent).");
    }

    #[test]
    fn malformed() {
        let res = dispatch(&Args { n_vars: Some(3), ..args("1 1 2; 0 1 5") });
        assert_eq!(
            res.unwrap_err().to_string(),
            "malformed input: augmented matrix must have 4 columns, got 3."
        );

        assert!(dispatch(&args("1; 2")).is_err());
    }
}

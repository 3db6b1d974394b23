use serde_json::json;
use ela_matrix::{MatTrait, Q};
use ela_matrix::dense::{rank, span_contains, span_coeffs, Mat};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    // the columns of `D` span the subspace.
    #[command(flatten)]
    pub input: Input,

    /// The vector to test.
    #[arg(short, long)]
    pub s: String,

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
        let d: Mat<Q> = self.args.input.load()?;
        let s = parse_vector(&self.args.s)?;

        ensure!(s.len() == d.nrows(), "`s` must have {} entries, got {}.", d.nrows(), s.len());

        let contained = span_contains(&d, &s)?;
        let r0 = rank(&d);
        let r1 = rank(&d.augment(&s));
        let sol = span_coeffs(&d, &s)?;

        if self.args.format == Format::Json {
            return to_json(&json!({
                "rank_d": r0,
                "rank_ds": r1,
                "contained": contained,
                "particular": sol.particular(),
                "coeffs": sol
            }))
        }

        self.buff.out(&format!("rank(D) = {r0}"));
        self.buff.out(&format!("rank([D|s]) = {r1}"));
        self.buff.out("");

        if !contained {
            self.buff.out("s is NOT in span(D).");
            return Ok(self.buff.flush())
        }

        self.buff.out("s is in span(D).");
        self.buff.out("");
        self.buff.out(&solution2str(&sol, "c"));

        if let Some(c) = sol.particular() {
            if !sol.is_unique() {
                self.buff.out("");
                self.buff.out(&format!("particular (t = 0): c = {}", vec2str(&c)));
            }
        }

        Ok(self.buff.flush())
    }
}

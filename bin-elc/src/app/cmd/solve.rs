use log::info;
use serde_json::json;
use ela_matrix::{MatTrait, Q};
use ela_matrix::batch::solve_all;
use ela_matrix::config::set_multithread_enabled;
use ela_matrix::dense::Mat;
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub input: Input,

    /// Right-hand side. Repeat to solve several systems with the same `A`.
    #[arg(short, long, required = true)]
    pub b: Vec<String>,

    #[arg(long)]
    pub single_thread: bool,

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
        ensure!(!self.args.b.is_empty(), "no right-hand side given.");

        if self.args.single_thread {
            set_multithread_enabled(false);
        }

        let a: Mat<Q> = self.args.input.load()?;
        let systems = self.args.b.iter().map(|b| -> Result<_, Box<dyn std::error::Error>> {
            let b = parse_vector(b)?;
            ensure!(b.len() == a.nrows(), "`b` must have {} entries, got {}.", a.nrows(), b.len());
            Ok((a.clone(), b))
        }).collect::<Result<Vec<_>, _>>()?;

        info!("A: {:?}, {} right-hand sides.", a.shape(), systems.len());

        let sols = solve_all(&systems).into_iter().collect::<Result<Vec<_>, _>>()?;

        if self.args.format == Format::Json {
            return to_json(&json!(sols))
        }

        let many = sols.len() > 1;
        for ((_, b), sol) in systems.iter().zip(sols.iter()) {
            if many {
                self.buff.out(&format!("b = {}:", vec2str(b)));
            }
            self.buff.out(&solution2str(sol, "x"));
            if many {
                self.buff.out("");
            }
        }

        Ok(self.buff.flush())
    }
}

use log::{info, warn};
use clap::{Parser, Subcommand};

use super::cmd::{echelon, rref, solve, lsq, backsub, rank, span, subspace, indep};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Row echelon form and pivot columns.
    Ref(echelon::Args),
    /// Reduced row echelon form.
    Rref(rref::Args),
    /// Solve `A x = b` for one or more `b`.
    Solve(solve::Args),
    /// Least-squares solutions of `A x = b` and the residual.
    Lsq(lsq::Args),
    /// Back-substitute an augmented matrix in echelon form.
    BackSub(backsub::Args),
    /// Rank and nullity.
    Rank(rank::Args),
    /// Whether a vector lies in the span of the columns.
    Span(span::Args),
    /// Bases of the column, row and null spaces.
    Subspace(subspace::Args),
    /// Linear independence of the columns.
    Indep(indep::Args),
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        let level = match &self.command {
            Cmd::Ref(args)      => args.log,
            Cmd::Rref(args)     => args.log,
            Cmd::Solve(args)    => args.log,
            Cmd::Lsq(args)      => args.log,
            Cmd::BackSub(args)  => args.log,
            Cmd::Rank(args)     => args.log,
            Cmd::Span(args)     => args.log,
            Cmd::Subspace(args) => args.log,
            Cmd::Indep(args)    => args.log,
        };
        ela::util::log::level_from_verbosity(level)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn new_with(args: CliArgs) -> Self {
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> {
        self.init_logger();

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if ela::util::log::init_simple_logger(l).is_err() {
            warn!("logger is already initialized.");
        }
    }

    pub fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> {
        guard_panic(||
            match &self.args.command {
                Cmd::Ref(args)      => echelon::dispatch(args),
                Cmd::Rref(args)     => rref::dispatch(args),
                Cmd::Solve(args)    => solve::dispatch(args),
                Cmd::Lsq(args)      => lsq::dispatch(args),
                Cmd::BackSub(args)  => backsub::dispatch(args),
                Cmd::Rank(args)     => rank::dispatch(args),
                Cmd::Span(args)     => span::dispatch(args),
                Cmd::Subspace(args) => subspace::dispatch(args),
                Cmd::Indep(args)    => indep::dispatch(args),
            }
        )
    }
}

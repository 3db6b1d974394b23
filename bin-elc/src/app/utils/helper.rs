#![allow(unused)]

use crate::app::err::*;
use itertools::Itertools;
use ela_matrix::{MatTrait, Q};
use ela_matrix::dense::{Mat, Solution};

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

/// Line buffer collecting the text output of a command.
#[derive(Default)]
pub struct Buffer {
    buff: String
}

impl Buffer {
    pub fn out(&mut self, str: &str) {
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    pub fn flush(&mut self) -> String {
        let res = std::mem::take(&mut self.buff);
        res.trim_end().to_string()
    }
}

/// Right-aligned rows, with a bar before column `sep` if given.
pub fn mat2str(a: &Mat<Q>, sep: Option<usize>) -> String {
    let (m, n) = a.shape();
    let strs = (0..m).map(|i|
        (0..n).map(|j| a[(i, j)].to_string()).collect_vec()
    ).collect_vec();

    let widths = (0..n).map(|j|
        strs.iter().map(|r| r[j].len()).max().unwrap_or(0)
    ).collect_vec();

    strs.iter().map(|r| {
        let entries = r.iter().enumerate().map(|(j, s)| {
            let s = format!("{s:>w$}", w = widths[j]);
            if sep == Some(j) { format!("| {s}") } else { s }
        }).join("  ");
        format!("[ {entries} ]")
    }).join("\n")
}

pub fn vec2str(v: &[Q]) -> String {
    ela::util::format::vec(v)
}

pub fn rows_of(a: &Mat<Q>) -> Vec<Vec<Q>> {
    a.rows().collect()
}

/// Lines `x0 = ...`, followed by the binding of the parameters.
pub fn solution2str(sol: &Solution<Q>, var: &str) -> String {
    let Solution::Solved { solution, free_cols } = sol else {
        return String::from("no solution (inconsistent).")
    };

    let mut lines = solution.iter().enumerate().map(|(j, x)|
        format!("{var}{j} = {x}")
    ).collect_vec();

    if !free_cols.is_empty() {
        let params = free_cols.iter().enumerate().map(|(k, j)|
            format!("t{k} = {var}{j}")
        ).join(", ");
        lines.push(format!("free: {params}"));
    }

    lines.join("\n")
}

pub fn to_json<T>(value: &T) -> Result<String, Box<dyn std::error::Error>>
where T: serde::Serialize {
    let s = serde_json::to_string_pretty(value)?;
    Ok(s)
}

use std::fmt::Display;
use itertools::Itertools;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') { 
        format!("({s})")
    } else { 
        s
    }
}

// a coefficient glued to a symbol must not read as a quotient.
fn paren_coeff(r: &str) -> String { 
    if r.contains([' ', '/']) { 
        format!("({r})")
    } else { 
        r.to_string()
    }
}

/// Formats `Σ r·x` with the sign folded into the operator,
/// a symbol `"1"` denoting the constant term.
pub fn lc<X, R, S>(terms: S) -> String
where 
    X: Display, 
    R: Display, 
    S: IntoIterator<Item = (X, R)>
{ 
    let mut res = String::new();

    for (i, (x, r)) in terms.into_iter().enumerate() {
        let x = x.to_string();
        let r = paren_expr(r);

        let (neg, r) = match r.strip_prefix('-') { 
            Some(r) => (true, r.to_string()),
            None    => (false, r)
        };

        let term = if x == "1" { 
            r
        } else if r == "1" { 
            x
        } else { 
            format!("{}{x}", paren_coeff(&r))
        };

        let op = match (i, neg) { 
            (0, false) => "",
            (0, true)  => "-",
            (_, false) => " + ",
            (_, true)  => " - ",
        };

        res.push_str(op);
        res.push_str(&term);
    }

    if res.is_empty() { 
        String::from("0")
    } else { 
        res
    }
}

/// `(a, b, c)`
pub fn vec<I>(entries: I) -> String
where I: IntoIterator, I::Item: Display { 
    format!("({})", entries.into_iter().join(", "))
}

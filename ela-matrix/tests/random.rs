use num_bigint::BigInt;
use num_traits::Zero;
use rand::Rng;
use ela_matrix::{MatTrait, Q};
use ela_matrix::dense::*;

const TRIALS: usize = 30;

fn q(a: i64) -> Q {
    Q::from_numer(BigInt::from(a))
}

fn rand_mat<G: Rng>(rng: &mut G, shape: (usize, usize), density: f64) -> Mat<Q> {
    Mat::from_fn(shape, |_, _|
        if rng.gen::<f64>() < density {
            q(rng.gen_range(-5..=5))
        } else {
            Q::zero()
        }
    )
}

fn rand_shape<G: Rng>(rng: &mut G) -> (usize, usize) {
    (rng.gen_range(1..=6), rng.gen_range(1..=6))
}

// unit lower triangular, hence invertible.
fn rand_row_op<G: Rng>(rng: &mut G, m: usize) -> Mat<Q> {
    Mat::from_fn((m, m), |i, j|
        if i == j {
            q(1)
        } else if i > j {
            q(rng.gen_range(-3..=3))
        } else {
            Q::zero()
        }
    )
}

#[test]
fn pivots_are_increasing_and_bounded() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let shape = rand_shape(&mut rng);
        let a = rand_mat(&mut rng, shape, 0.6);
        let res = reduce_to_ref(a);
        let pivots = res.pivots();

        assert!(pivots.windows(2).all(|w| w[0] < w[1]));
        assert!(pivots.len() <= shape.0.min(shape.1));
        assert!(is_echelon(res.result()));

        for (i, &j) in pivots.iter().enumerate() {
            for i1 in i + 1 .. shape.0 {
                assert!(res.result()[(i1, j)].is_zero());
            }
        }
    }
}

#[test]
fn rank_is_preserved() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let shape = rand_shape(&mut rng);
        let a = rand_mat(&mut rng, shape, 0.5);
        let r = rank(&a);

        assert_eq!(r, rank(&a.transpose()));

        let p = rand_row_op(&mut rng, shape.0);
        assert_eq!(r, rank(&(&p * &a)));
    }
}

#[test]
fn low_rank_product() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let (m, n) = rand_shape(&mut rng);
        let r = rng.gen_range(1..=m.min(n));

        // B = [I_r; *] and C = [I_r | *] have rank r, so does B C.
        let b = Mat::from_fn((m, r), |i, j|
            if i < r { if i == j { q(1) } else { Q::zero() } } else { q(rng.gen_range(-4..=4)) }
        );
        let c = Mat::from_fn((r, n), |i, j|
            if j < r { if i == j { q(1) } else { Q::zero() } } else { q(rng.gen_range(-4..=4)) }
        );
        let a = &b * &c;

        assert_eq!(rank(&a), r);
        assert_eq!(nullity(&a), n - r);
        assert_eq!(null_basis(&a).len(), n - r);
    }
}

#[test]
fn ref_is_idempotent() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let shape = rand_shape(&mut rng);
        let a = rand_mat(&mut rng, shape, 0.5);
        let (e, pivots) = reduce_to_ref(a).destruct();
        let (e2, pivots2) = reduce_to_ref(e.clone()).destruct();

        assert_eq!(e, e2);
        assert_eq!(pivots, pivots2);
    }
}

#[test]
fn rref_is_reduced() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let shape = rand_shape(&mut rng);
        let a = rand_mat(&mut rng, shape, 0.7);
        let res = rref(a.clone());

        assert!(is_rref(res.result()));
        assert_eq!(res.rank(), rank(&a));
    }
}

#[test]
fn planted_solution_is_recovered() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let shape = rand_shape(&mut rng);
        let a = rand_mat(&mut rng, shape, 0.6);
        let x0: Vec<_> = (0..shape.1).map(|_| q(rng.gen_range(-9..=9))).collect();
        let b = a.apply(&x0);

        let sol = solve(&a, &b).unwrap();
        assert!(sol.is_consistent());

        let params: Vec<_> = (0..sol.n_params()).map(|_| q(rng.gen_range(-9..=9))).collect();
        let x = sol.eval(&params).unwrap();
        assert_eq!(a.apply(&x), b);

        if rank(&a) == shape.1 {
            assert!(sol.is_unique());
            assert_eq!(x, x0);
        }
    }
}

#[test]
fn planted_inconsistency_is_detected() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let (m, n) = rand_shape(&mut rng);
        let a = rand_mat(&mut rng, (m, n), 0.6);

        // duplicate the first row with a different right-hand side.
        let mut rows: Vec<_> = a.rows().collect();
        rows.push(rows[0].clone());
        let a = Mat::from_rows(rows).unwrap();

        let mut b: Vec<_> = (0..m).map(|_| q(rng.gen_range(-9..=9))).collect();
        b.push(&b[0] + q(1));

        let sol = solve(&a, &b).unwrap();
        assert_eq!(sol, Solution::Inconsistent);
        assert_eq!(span_contains(&a, &b), Ok(false));
        assert_eq!(a.nrows(), m + 1);
    }
}

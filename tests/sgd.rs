use std::thread;

use linear_sgd::{
    SgdErr,
    arch::{
        Function,
        activations::{ActFn, Activation},
    },
    dataset::Dataset,
    optimization::{BiasPenalty, Penalty, Sgd, SgdBuilder},
    specs::SgdSpec,
};
use ndarray::{Array2, array};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.)
}

fn random_dataset(rng: &mut StdRng, n: usize, d: usize) -> Dataset {
    let x = Array2::from_shape_fn((n, d), |_| rng.random_range(-2.0..2.0));
    let y = Array2::from_shape_fn((n, 1), |_| rng.random_range(-1.0..1.0));
    Dataset::new(x, y).unwrap()
}

#[test]
fn batch_and_single_predictions_agree() {
    let mut rng = StdRng::seed_from_u64(5);

    for act_fn in [None, Some(ActFn::tanh()), Some(ActFn::sigmoid(2.))] {
        let dataset = random_dataset(&mut rng, 30, 4);
        let mut sgd = Sgd::new(
            Penalty::L1,
            0.05,
            300,
            0.2,
            act_fn,
            StdRng::seed_from_u64(9),
        )
        .unwrap();
        sgd.fit(dataset.x(), dataset.y()).unwrap();

        let batch = sgd.predict_m(dataset.x()).unwrap();

        assert_eq!(batch.dim(), (30, 1));
        for (row, &y_m) in dataset.x().rows().into_iter().zip(batch.column(0)) {
            let y_r = sgd.predict(row).unwrap();
            assert!(close(y_r, y_m), "{y_r} != {y_m}");
            assert_eq!(sgd.eval(row).unwrap(), y_r);
        }
    }
}

#[test]
fn weights_hold_features_then_bias() {
    let mut rng = StdRng::seed_from_u64(1);
    let dataset = random_dataset(&mut rng, 10, 3);
    let mut sgd = Sgd::new(Penalty::L2, 0., 100, 0.1, None, rng).unwrap();

    sgd.fit(dataset.x(), dataset.y()).unwrap();
    let w = sgd.weights();
    let x = array![0.5, -1., 2.];

    assert_eq!(w.len(), 4);
    assert_eq!(sgd.input_dims(), 3);
    let expected = 0.5 * w[0] - w[1] + 2. * w[2] + w[3];
    assert!(close(sgd.predict(x.view()).unwrap(), expected));
}

#[test]
fn predict_before_fit_is_not_fitted() {
    let sgd = Sgd::new(Penalty::L2, 0., 10, 0.1, None, StdRng::seed_from_u64(0)).unwrap();

    assert_eq!(sgd.predict(array![1.].view()), Err(SgdErr::NotFitted));
    assert_eq!(sgd.eval(array![1.].view()), Err(SgdErr::NotFitted));
    assert!(matches!(
        sgd.predict_m(array![[1.]].view()),
        Err(SgdErr::NotFitted)
    ));
}

#[test]
fn copies_do_not_share_weights() {
    let mut rng = StdRng::seed_from_u64(3);
    let dataset = random_dataset(&mut rng, 20, 2);
    let mut source = Sgd::new(Penalty::L2, 0.1, 50, 0.1, None, rng).unwrap();
    source.fit(dataset.x(), dataset.y()).unwrap();
    let before = source.weights();

    let mut copy = source.new_copy_with(StdRng::seed_from_u64(4));
    assert!(!copy.is_fitted());
    assert_eq!(copy.penalty(), source.penalty());
    assert_eq!(copy.lambda(), source.lambda());
    assert_eq!(copy.num_iterations(), source.num_iterations());
    assert_eq!(copy.learning_rate(), source.learning_rate());

    copy.fit(dataset.x(), dataset.y()).unwrap();
    copy.fit(dataset.x(), dataset.y()).unwrap();

    assert_eq!(source.weights(), before);
}

#[test]
fn identity_activation_matches_no_activation() {
    struct Identity;

    impl Activation for Identity {
        fn f(&self, x: f64) -> f64 {
            x
        }

        fn df(&self, _x: f64) -> f64 {
            1.
        }
    }

    let mut rng = StdRng::seed_from_u64(8);
    let dataset = random_dataset(&mut rng, 25, 2);

    let build = |act_fn| {
        Sgd::new(Penalty::L2, 0.01, 200, 0.1, act_fn, StdRng::seed_from_u64(2)).unwrap()
    };
    let mut plain = build(None);
    let mut custom = build(Some(ActFn::custom(Identity)));

    plain.fit(dataset.x(), dataset.y()).unwrap();
    custom.fit(dataset.x(), dataset.y()).unwrap();

    assert_eq!(plain.weights(), custom.weights());
}

#[test]
fn concurrent_predictions() {
    let mut rng = StdRng::seed_from_u64(6);
    let dataset = random_dataset(&mut rng, 40, 3);
    let mut sgd = Sgd::new(Penalty::L2, 0.01, 100, 0.1, Some(ActFn::tanh()), rng).unwrap();
    sgd.fit(dataset.x(), dataset.y()).unwrap();
    let expected = sgd.predict_m(dataset.x()).unwrap();

    let (sgd, dataset) = (&sgd, &dataset);
    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || sgd.predict_m(dataset.x()).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn exempt_bias_is_not_shrunk() {
    // Every label is the same constant, so only the bias has something to learn.
    let x = Array2::<f64>::zeros((10, 1));
    let y = Array2::from_elem((10, 1), 2.);

    let build = |bias_penalty| {
        Sgd::new(Penalty::L2, 0.5, 500, 0.1, None, StdRng::seed_from_u64(0))
            .unwrap()
            .with_bias_penalty(bias_penalty)
    };

    let mut regularized = build(BiasPenalty::Regularized);
    let mut exempt = build(BiasPenalty::Exempt);
    regularized.fit(x.view(), y.view()).unwrap();
    exempt.fit(x.view(), y.view()).unwrap();

    let bias = |sgd: &Sgd<StdRng>| sgd.weights()[1];
    assert!((bias(&exempt) - 2.).abs() < 1e-6);
    assert!((bias(&regularized) - 2. / 1.5).abs() < 1e-6);
}

#[test]
fn spec_to_fitted_model() {
    let json = r#"{
        "penalty": "l2",
        "lambda": 0.01,
        "num_iterations": 1000,
        "learning_rate": 0.1,
        "act_fn": "tanh",
        "seed": 17
    }"#;
    let spec: SgdSpec = serde_json::from_str(json).unwrap();
    let mut rng = StdRng::seed_from_u64(18);
    let dataset = Dataset::linear(100, 0.25, -0.5, 0.1, &mut rng).unwrap();

    let mut sgd = SgdBuilder::new().build(&spec).unwrap();
    sgd.fit(dataset.x(), dataset.y()).unwrap();

    assert_eq!(sgd.input_dims(), 1);
    assert!(matches!(sgd.act_fn(), Some(ActFn::Tanh(_))));

    let invalid = SgdSpec {
        penalty: "l3".into(),
        ..spec
    };
    assert!(matches!(
        SgdBuilder::new().build(&invalid),
        Err(SgdErr::InvalidConfig(_))
    ));
}

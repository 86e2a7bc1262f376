use crate::estimator::HumanScoreSummary;
use crate::estimator::mse::{mse_true, mse_true_double_scored};
use crate::model::response::{ResponseRecord, ResponseSet};

#[test]
fn test_double_scored_weighs_twice() {
    let set = ResponseSet::new(vec![
        ResponseRecord::double(1.0, 2.0, 2.0),
        ResponseRecord::single(1.0, 2.0),
    ])
    .unwrap();
    let summary = HumanScoreSummary::from_responses(&set);
    let system = set.system_scores();
    // (2 * 1 + 1 * 1 - 2 * 0) / 3
    assert!((mse_true(&summary, &system, 0.0) - 1.0).abs() < 1e-12);
    // (3 - 2 * 0.3) / 3
    assert!((mse_true(&summary, &system, 0.3) - 0.8).abs() < 1e-12);
}

#[test]
fn test_simplified_form() {
    let set = ResponseSet::new(vec![
        ResponseRecord::double(1.0, 2.0, 3.0),
        ResponseRecord::double(4.0, 4.0, 4.0),
    ])
    .unwrap();
    let summary = HumanScoreSummary::from_responses(&set);
    let system = set.system_scores();
    // mean((1.5)^2, 0) - 0.25 / 2
    let expected = 2.25 / 2.0 - 0.125;
    assert!((mse_true_double_scored(&summary, &system, 0.25) - expected).abs() < 1e-12);
    assert!((mse_true(&summary, &system, 0.25) - expected).abs() < 1e-12);
}

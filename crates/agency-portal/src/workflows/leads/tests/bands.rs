use crate::workflows::leads::scoring::{
    score_badge_classes, score_color, score_label, ScoreLabel,
};

fn expected_band(score: u8) -> ScoreLabel {
    match score {
        80..=u8::MAX => ScoreLabel::Hot,
        60..=79 => ScoreLabel::Warm,
        40..=59 => ScoreLabel::Cool,
        _ => ScoreLabel::Cold,
    }
}

#[test]
fn label_matches_band_for_every_score() {
    for score in 0..=100u8 {
        let view = score_label(score);
        assert_eq!(view.label, expected_band(score), "score {score}");
        assert_eq!(view.emoji, view.label.emoji());
    }
}

#[test]
fn cutpoints_sit_on_band_boundaries() {
    assert_eq!(score_label(39).label, ScoreLabel::Cold);
    assert_eq!(score_label(40).label, ScoreLabel::Cool);
    assert_eq!(score_label(59).label, ScoreLabel::Cool);
    assert_eq!(score_label(60).label, ScoreLabel::Warm);
    assert_eq!(score_label(79).label, ScoreLabel::Warm);
    assert_eq!(score_label(80).label, ScoreLabel::Hot);
}

#[test]
fn color_and_badge_tokens_follow_the_band() {
    assert_eq!(score_color(95), "red");
    assert_eq!(score_color(65), "orange");
    assert_eq!(score_color(45), "blue");
    assert_eq!(score_color(5), "gray");

    for score in 0..=100u8 {
        let band = expected_band(score);
        assert_eq!(score_color(score), band.color());
        assert_eq!(score_badge_classes(score), band.badge_classes());
        assert!(score_badge_classes(score).contains(band.color()));
    }
}

#[test]
fn labels_order_from_cold_to_hot() {
    assert!(ScoreLabel::Cold < ScoreLabel::Cool);
    assert!(ScoreLabel::Cool < ScoreLabel::Warm);
    assert!(ScoreLabel::Warm < ScoreLabel::Hot);
    assert_eq!(
        serde_json::to_value(ScoreLabel::Warm).expect("serializes"),
        serde_json::json!("Warm")
    );
}

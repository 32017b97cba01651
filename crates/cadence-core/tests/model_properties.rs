use cadence_core::{
    classify, classify_with, train, CadenceError, ClassifierConfig, CorpusIndex, Document,
    OovFallback, Scoring,
};

fn corpus() -> Vec<Document> {
    vec![
        Document::new("adele0", "hello from the other side I must've called a thousand times"),
        Document::new("adele1", "we could have had it all rolling in the deep"),
        Document::new("adele2", "never mind I'll find someone like you"),
        Document::new("drake0", "started from the bottom now we're here"),
        Document::new("drake1", "you used to call me on my cell phone"),
        Document::new("queen0", "is this the real life is this just fantasy"),
        Document::new("queen1", "we will we will rock you -yeah-"),
    ]
}

fn within(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs()
}

#[test]
fn priors_and_conditionals_normalize() {
    let model = train(&corpus()).unwrap();

    assert!(within(model.priors().values().sum(), 1.0));
    for label in model.labels() {
        let table = model.conditional(label).unwrap();
        assert_eq!(table.len(), model.vocab_size());
        assert!(within(table.values().sum(), 1.0), "label {label}");
    }
}

#[test]
fn every_probability_is_strictly_positive() {
    let model = train(&corpus()).unwrap();
    for label in model.labels() {
        assert!(model.conditional(label).unwrap().values().all(|p| *p > 0.0));
    }
}

#[test]
fn training_is_bit_identical_across_document_orders() {
    let forward = corpus();
    let mut backward = corpus();
    backward.reverse();
    let mut rotated = corpus();
    rotated.rotate_left(3);

    let a = train(&forward).unwrap();
    let b = train(&backward).unwrap();
    let c = train(&rotated).unwrap();

    assert_eq!(a, b);
    assert_eq!(a, c);
    for label in a.labels() {
        for (token, p) in a.conditional(label).unwrap() {
            assert_eq!(p.to_bits(), b.probability(label, token).unwrap().to_bits());
        }
    }
}

#[test]
fn two_artist_scenario() {
    let docs = vec![
        Document::new("A0", "love love dance").with_label("A"),
        Document::new("B0", "pain pain cry").with_label("B"),
    ];
    let index = CorpusIndex::build(&docs).unwrap();
    assert_eq!(index.vocabulary.len(), 4);
    for token in ["love", "dance", "pain", "cry"] {
        assert!(index.vocabulary.contains(token));
    }

    let model = train(&docs).unwrap();
    assert_eq!(model.prior("A"), Some(0.5));
    assert_eq!(model.prior("B"), Some(0.5));
    assert!(within(model.probability("A", "love").unwrap(), 3.0 / 7.0));
    assert!(within(model.probability("A", "cry").unwrap(), 1.0 / 7.0));

    let tokens = vec!["love".to_string(), "love".to_string()];
    assert_eq!(classify(&tokens, &model).unwrap(), "A");
}

#[test]
fn unseen_tokens_never_fail() {
    let model = train(&corpus()).unwrap();
    let tokens: Vec<String> = ["xylophone", "zeppelin"].iter().map(|s| s.to_string()).collect();

    for fallback in [OovFallback::ProbabilitySum, OovFallback::CountSum] {
        for scoring in [Scoring::Product, Scoring::LogSpace] {
            let config = ClassifierConfig::new()
                .with_scoring(scoring)
                .with_oov_fallback(fallback);
            assert!(classify_with(&tokens, &model, &config).is_ok());
        }
    }
}

#[test]
fn classifies_held_out_lines() {
    let model = train(&corpus()).unwrap();
    let doc = Document::new("queen9", "is this just the real life");
    assert_eq!(classify(&doc.tokens, &model).unwrap(), "queen");
}

#[test]
fn empty_corpus_is_an_error() {
    assert!(matches!(train(&[]), Err(CadenceError::EmptyTrainingSet)));
}

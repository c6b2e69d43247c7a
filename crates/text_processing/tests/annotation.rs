//! End-to-end annotation over the bundled medical domain

use medlingo_core::{AnnotationRequest, AnnotationResult, Language, Term};
use medlingo_text_processing::MedicalKnowledge;

fn annotate(text: &str, source: Language, target: Language) -> AnnotationResult {
    let knowledge = MedicalKnowledge::bundled().unwrap();
    knowledge.annotate(&AnnotationRequest::new(text, source, target))
}

fn surfaces(result: &AnnotationResult) -> Vec<&str> {
    result
        .localized_terms
        .iter()
        .map(|t| t.term.as_str())
        .collect()
}

#[test]
fn test_fever_and_headache_into_hindi() {
    let result = annotate(
        "I have a fever and a headache.",
        Language::English,
        Language::Hindi,
    );

    assert_eq!(surfaces(&result), vec!["बुखार", "सिरदर्द"]);
    let canonical: Vec<&Term> = result.canonical_terms().collect();
    assert_eq!(canonical, vec![&Term::new("fever"), &Term::new("headache")]);

    assert_eq!(
        result.recommended_departments,
        vec!["तंत्रिका विज्ञान", "सामान्य चिकित्सा"]
    );
    // headache is listed before fever in the visual aid table
    assert_eq!(
        result.visual_aid.as_deref(),
        Some("http://localhost:5001/static/images/headache.jpg")
    );
}

#[test]
fn test_longest_match_wins() {
    let result = annotate(
        "Sudden chest pain, maybe a heart attack",
        Language::English,
        Language::Spanish,
    );

    assert_eq!(
        surfaces(&result),
        vec!["ataque al corazón", "dolor en el pecho"]
    );
    assert!(!result.canonical_terms().any(|t| t.as_str() == "pain"));
    assert_eq!(
        result.recommended_departments,
        vec!["Cardiología", "Emergencia"]
    );
    assert_eq!(
        result.visual_aid.as_deref(),
        Some("https://i.imgur.com/wS3gD3R.png")
    );
}

#[test]
fn test_partial_coverage_is_absorbed() {
    // high temperature and the departments have no French entries
    let result = annotate(
        "fever and high temperature",
        Language::English,
        Language::French,
    );

    assert_eq!(surfaces(&result), vec!["fièvre"]);
    assert!(result.recommended_departments.is_empty());
    assert_eq!(
        result.visual_aid.as_deref(),
        Some("https://i.imgur.com/sC207aF.png")
    );
}

#[test]
fn test_hindi_phrase_shadows_single_word() {
    let result = annotate("मुझे तेज़ बुखार है।", Language::Hindi, Language::English);

    assert_eq!(surfaces(&result), vec!["high temperature"]);
    assert_eq!(
        result.recommended_departments,
        vec!["General Medicine", "Infectious Disease"]
    );
    assert!(result.visual_aid.is_none());
}

#[test]
fn test_chinese_without_word_boundaries() {
    let result = annotate("我头痛，还有点发烧。", Language::Chinese, Language::English);

    assert_eq!(surfaces(&result), vec!["fever", "headache"]);
    assert!(!result.canonical_terms().any(|t| t.as_str() == "pain"));
    assert_eq!(
        result.recommended_departments,
        vec!["General Medicine", "Neurology"]
    );
}

#[test]
fn test_shared_surface_yields_every_term() {
    let result = annotate("Nach der Operation", Language::German, Language::English);

    assert_eq!(surfaces(&result), vec!["operation", "surgery"]);
    assert_eq!(result.recommended_departments, vec!["General Surgery"]);
}

#[test]
fn test_no_terms() {
    assert!(annotate("hello world", Language::English, Language::Hindi).is_empty());
    assert!(annotate("", Language::English, Language::Hindi).is_empty());
    assert!(annotate("!!! ...", Language::English, Language::Hindi).is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let text = "Cough, fever, nausea and dizziness after the vaccine";
    let first = annotate(text, Language::English, Language::German);
    let second = annotate(text, Language::English, Language::German);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.localized_terms.len(), 5);
}

#[test]
fn test_concurrent_annotation_is_consistent() {
    let knowledge = MedicalKnowledge::bundled().unwrap();
    let request = AnnotationRequest::new(
        "I have a fever and a headache after the heart attack",
        Language::English,
        Language::Hindi,
    );
    let expected = knowledge.annotate(&request);

    let results: Vec<AnnotationResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let shared = MedicalKnowledge::bundled().unwrap();
                    (0..50).map(|_| shared.annotate(&request)).last().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|r| *r == expected));
    assert_eq!(expected.localized_terms.len(), 3);
}

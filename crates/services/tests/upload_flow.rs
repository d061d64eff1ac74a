use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{Clock, StudyService, StudyServiceError};
use study_core::model::{
    Answers, MAX_KEY_POINTS, OptionLetter, ScoreBand, SubjectCategory, UploadedFile,
    ValidationError,
};
use study_core::time::fixed_now;

fn service() -> StudyService {
    StudyService::default().with_clock(Clock::fixed(fixed_now()))
}

#[test]
fn upload_to_graded_quiz_and_summary() {
    let service = service();
    let file = UploadedFile::pdf("biology_notes.pdf", 512_000);

    let content = service.analyze_upload(&file).unwrap();
    assert_eq!(content.page_count, 5);
    assert!(content.text.starts_with("This biology document"));
    assert_eq!(
        service.classify(&content, &file.name),
        SubjectCategory::Science
    );

    let mut set = service
        .build_quiz_set(&file, &mut StdRng::seed_from_u64(11))
        .unwrap();
    assert_eq!(set.questions().len(), 10);
    for q in set.questions() {
        assert_eq!(q.options.iter().count(), 4);
        assert!(!q.correct_text().is_empty());
    }
    assert_eq!(set.flashcards().len(), set.questions().len());

    // Right on the first eight, wrong on the rest.
    let answers: Answers = set
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let pick = if i < 8 {
                q.correct_answer
            } else {
                OptionLetter::from_index((q.correct_answer.index() + 1) % 4).unwrap()
            };
            (q.id, pick)
        })
        .collect();
    let result = service.grade(&mut set, answers);
    assert_eq!(result.score, 8);
    assert_eq!(result.percentage(), 80);
    assert_eq!(result.band(), ScoreBand::Great);

    let summary = service.summarize(&file).unwrap();
    assert!((1..=MAX_KEY_POINTS).contains(&summary.key_points.len()));
    assert_eq!(
        summary.word_count,
        summary.content.split_whitespace().count()
    );
}

#[test]
fn page_count_stays_in_range() {
    let service = service();
    for size in [1_024_u64, 102_399, 102_400, 5_000_000, 50 * 1024 * 1024] {
        let content = service
            .analyze_upload(&UploadedFile::pdf("notes.pdf", size))
            .unwrap();
        let expected = (size / 102_400).clamp(1, 500);
        assert_eq!(u64::from(content.page_count), expected, "size {size}");
    }
}

#[test]
fn invalid_uploads_are_rejected() {
    let service = service();
    let cases = [
        (UploadedFile::pdf("notes.pdf", 0), ValidationError::Empty),
        (
            UploadedFile::new("photo.png", 4096, Some("image/png".into())),
            ValidationError::NotPdf,
        ),
        (UploadedFile::pdf("", 4096), ValidationError::Missing),
    ];
    for (file, expected) in cases {
        match service.analyze_upload(&file) {
            Err(StudyServiceError::Validation(err)) => assert_eq!(err, expected),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    let too_small = service.analyze_upload(&UploadedFile::pdf("notes.pdf", 512));
    assert!(matches!(
        too_small,
        Err(StudyServiceError::Validation(ValidationError::TooSmall { .. }))
    ));
    let too_large = service.analyze_upload(&UploadedFile::pdf("notes.pdf", 50 * 1024 * 1024 + 1));
    let err = too_large.unwrap_err();
    assert_eq!(
        err.to_string(),
        "PDF file is too large. Please upload a file smaller than 50MB."
    );
}

#[test]
fn quiz_set_serializes_with_camel_case_fields() {
    let set = service()
        .build_quiz_set(
            &UploadedFile::pdf("world_history.pdf", 4096),
            &mut StdRng::seed_from_u64(4),
        )
        .unwrap();
    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(value["title"], "world_history Quiz");
    assert_eq!(value["fileName"], "world_history.pdf");
    assert_eq!(value["questions"][0]["id"], "1");
    assert!(value["questions"][0]["options"]["A"].is_string());
    assert!(value["lastResult"].is_null());
}

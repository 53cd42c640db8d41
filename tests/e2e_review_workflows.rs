//! End-to-End Test Suite: Complete Review Workflows
//!
//! This test suite drives a full evaluation cycle through the public domain
//! API exactly as an application layer would: build the review, lay out the
//! weighted rubric, gather feedback from both sides, and close the review.

use chrono::Utc;

use appraisal_domain::{Category, DomainError, Rating, Review, User};

/// Complete workflow: construct a review, add a weighted assessment, collect
/// feedback from reviewer and reviewee, complete the review, and verify the
/// terminal state.
#[test]
fn test_complete_review_workflow() {
    let reviewee = User::new("dana@example.com", "Dana", "Reviewee");
    let reviewer = User::new("robin@example.com", "Robin", "Reviewer");

    // Open the review cycle
    let mut review = Review::new(Utc::now(), "Q3 Review", reviewee.clone(), reviewer.clone());

    // Lay out the rubric
    let communication = Category::new("Communication", "Clarity in writing and speech");
    review.add_assessment(communication.clone(), 30).unwrap();

    // Both sides weigh in on the same assessment
    let assessment = review.assessment_mut(&communication).unwrap();
    assessment.provide_feedback(
        reviewer.clone(),
        "Consistently clear and proactive updates",
        Rating::RoleModel,
    );
    assessment.provide_feedback(
        reviewee.clone(),
        "I feel my updates landed well this quarter",
        Rating::Expected,
    );

    let assessment = review.assessment(&communication).unwrap();
    assert_eq!(assessment.feedback().len(), 2);
    assert_eq!(assessment.feedback()[&reviewer].rating(), Rating::RoleModel);
    assert_eq!(assessment.feedback()[&reviewee].rating(), Rating::Expected);

    // The reviewer closes the review
    review.mark_as_completed(&reviewer).unwrap();
    assert!(review.completed_at().is_some());

    // Completion is terminal: the reviewee's attempt reports the completed
    // state, not an authorization failure.
    let result = review.mark_as_completed(&reviewee);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::ReviewAlreadyCompleted
    ));
}

/// A multi-category rubric keeps categories unique while feedback flows
/// independently per assessment.
#[test]
fn test_multi_category_review_workflow() {
    let reviewee = User::new("dana@example.com", "Dana", "Reviewee");
    let reviewer = User::new("robin@example.com", "Robin", "Reviewer");
    let mut review = Review::new(Utc::now(), "Annual Review", reviewee.clone(), reviewer.clone());

    let communication = Category::new("Communication", "Clarity in writing and speech");
    let delivery = Category::new("Delivery", "Shipping work reliably");
    review.add_assessment(communication.clone(), 40).unwrap();
    review.add_assessment(delivery.clone(), 60).unwrap();

    // The rubric rejects a repeated category outright
    let duplicate = review.add_assessment(delivery.clone(), 10);
    assert!(matches!(
        duplicate.unwrap_err(),
        DomainError::DuplicateAssessmentCategory { .. }
    ));
    assert_eq!(review.assessments().len(), 2);

    review
        .assessment_mut(&communication)
        .unwrap()
        .provide_feedback(reviewer.clone(), "Solid docs", Rating::Expected);
    review
        .assessment_mut(&delivery)
        .unwrap()
        .provide_feedback(reviewer.clone(), "Shipped everything planned", Rating::RoleModel);

    assert_eq!(review.assessment(&communication).unwrap().feedback().len(), 1);
    assert_eq!(review.assessment(&delivery).unwrap().feedback().len(), 1);

    review.mark_as_completed(&reviewer).unwrap();
    assert!(review.is_completed());
}

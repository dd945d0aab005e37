//! Integration tests for the claims repository against in-memory SQLite

use domain_claims::ClaimStatus;
use infra_db::{ClaimFilter, ClaimsRepository};
use test_utils::{claims_with_scores, memory_pool, TestClaimBuilder};

// ============================================================================
// Full-Replace Load Tests
// ============================================================================

mod replace_tests {
    use super::*;

    #[tokio::test]
    async fn replace_inserts_the_batch() {
        let repo = ClaimsRepository::new(memory_pool().await);

        let inserted = repo.replace_all(&claims_with_scores(&[10, 50, 90])).await.unwrap();
        assert_eq!(inserted, 3);

        let records = repo.list(&ClaimFilter::default()).await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].claim_id, "CLM-0001");
        assert_eq!(records[0].status, "New");
    }

    #[tokio::test]
    async fn replace_never_mixes_old_and_new_rows() {
        let repo = ClaimsRepository::new(memory_pool().await);

        repo.replace_all(&claims_with_scores(&[10, 20, 30, 40])).await.unwrap();
        repo.replace_all(&claims_with_scores(&[99])).await.unwrap();

        let records = repo.list(&ClaimFilter::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].claim_id, "CLM-0001");
        assert_eq!(records[0].fraud_score, 99);
    }

    #[tokio::test]
    async fn replacing_with_empty_batch_empties_the_store() {
        let repo = ClaimsRepository::new(memory_pool().await);

        repo.replace_all(&claims_with_scores(&[10, 20])).await.unwrap();
        repo.replace_all(&[]).await.unwrap();

        assert!(repo.list(&ClaimFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_claim_ids_roll_back_the_whole_batch() {
        let repo = ClaimsRepository::new(memory_pool().await);
        repo.replace_all(&claims_with_scores(&[10])).await.unwrap();

        let dup = vec![
            TestClaimBuilder::new().with_claim_id("CLM-0001").build(),
            TestClaimBuilder::new().with_claim_id("CLM-0001").build(),
        ];
        assert!(repo.replace_all(&dup).await.is_err());

        // The failed replace must not have touched the previous contents.
        let records = repo.list(&ClaimFilter::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fraud_score, 10);
    }
}

// ============================================================================
// Listing and Filter Tests
// ============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn pagination_respects_skip_and_limit() {
        let repo = ClaimsRepository::new(memory_pool().await);
        repo.replace_all(&claims_with_scores(&[1, 2, 3, 4, 5])).await.unwrap();

        let filter = ClaimFilter { skip: 1, limit: 2, ..Default::default() };
        let records = repo.list(&filter).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].claim_id, "CLM-0002");
        assert_eq!(records[1].claim_id, "CLM-0003");
    }

    #[tokio::test]
    async fn score_bounds_are_inclusive() {
        let repo = ClaimsRepository::new(memory_pool().await);
        repo.replace_all(&claims_with_scores(&[79, 80, 85, 90, 91])).await.unwrap();

        let filter = ClaimFilter {
            min_score: Some(80),
            max_score: Some(90),
            ..Default::default()
        };
        let records = repo.list(&filter).await.unwrap();

        let scores: Vec<i64> = records.iter().map(|r| r.fraud_score).collect();
        assert_eq!(scores, vec![80, 85, 90]);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_three_fields() {
        let repo = ClaimsRepository::new(memory_pool().await);
        let claims = vec![
            TestClaimBuilder::new()
                .with_claim_id("CLM-0001")
                .with_patient_id("PAT-001")
                .with_diagnosis("DIABETES")
                .build(),
            TestClaimBuilder::new()
                .with_claim_id("CLM-0002")
                .with_patient_id("diab-77")
                .with_diagnosis("MALARIA")
                .build(),
            TestClaimBuilder::new()
                .with_claim_id("CLM-0003")
                .with_patient_id("PAT-003")
                .with_diagnosis("TYPHOID")
                .build(),
        ];
        repo.replace_all(&claims).await.unwrap();

        let filter = ClaimFilter { search: Some("DIAB".to_string()), ..Default::default() };
        let records = repo.list(&filter).await.unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.claim_id.as_str()).collect();
        assert_eq!(ids, vec!["CLM-0001", "CLM-0002"]);

        let filter = ClaimFilter { search: Some("clm-0003".to_string()), ..Default::default() };
        assert_eq!(repo.list(&filter).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn search_and_score_filters_combine() {
        let repo = ClaimsRepository::new(memory_pool().await);
        let claims = vec![
            TestClaimBuilder::new().with_claim_id("CLM-0001").with_diagnosis("DIABETES").with_score(10).build(),
            TestClaimBuilder::new().with_claim_id("CLM-0002").with_diagnosis("DIABETES").with_score(90).build(),
        ];
        repo.replace_all(&claims).await.unwrap();

        let filter = ClaimFilter {
            search: Some("diabetes".to_string()),
            min_score: Some(50),
            ..Default::default()
        };
        let records = repo.list(&filter).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].claim_id, "CLM-0002");
    }
}

// ============================================================================
// Aggregate View Tests
// ============================================================================

mod stats_tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_yields_all_zero_stats() {
        let repo = ClaimsRepository::new(memory_pool().await);

        let stats = repo.stats().await.unwrap();

        assert_eq!(stats.total_claims, 0);
        assert_eq!(stats.average_claim_amount, 0.0);
        assert_eq!(stats.flagged_claims_count, 0);
        assert_eq!(stats.flagged_claims_percentage, 0.0);
    }

    #[tokio::test]
    async fn stats_average_and_flagged_percentage() {
        let repo = ClaimsRepository::new(memory_pool().await);
        let claims = vec![
            TestClaimBuilder::new().with_claim_id("CLM-0001").with_amount(100.0).with_score(80).build(),
            TestClaimBuilder::new().with_claim_id("CLM-0002").with_amount(200.0).with_score(75).build(),
            TestClaimBuilder::new().with_claim_id("CLM-0003").with_amount(50.0).with_score(10).build(),
        ];
        repo.replace_all(&claims).await.unwrap();

        let stats = repo.stats().await.unwrap();

        assert_eq!(stats.total_claims, 3);
        assert_eq!(stats.average_claim_amount, 116.67);
        // Exactly 75 is not flagged; the threshold is strict.
        assert_eq!(stats.flagged_claims_count, 1);
        assert_eq!(stats.flagged_claims_percentage, 33.33);
    }

    #[tokio::test]
    async fn distribution_bands_partition_the_store() {
        let repo = ClaimsRepository::new(memory_pool().await);
        repo.replace_all(&claims_with_scores(&[0, 25, 26, 50, 75, 76, 100])).await.unwrap();

        let dist = repo.score_distribution().await.unwrap();

        assert_eq!(dist.low, 2);
        assert_eq!(dist.medium, 3);
        assert_eq!(dist.high, 2);

        let stats = repo.stats().await.unwrap();
        assert_eq!(dist.low + dist.medium + dist.high, stats.total_claims);
    }
}

// ============================================================================
// Review Workflow Tests
// ============================================================================

mod review_tests {
    use super::*;

    #[tokio::test]
    async fn update_status_persists() {
        let repo = ClaimsRepository::new(memory_pool().await);
        repo.replace_all(&claims_with_scores(&[50])).await.unwrap();

        let updated = repo.update_status("CLM-0001", ClaimStatus::Closed).await.unwrap();
        assert_eq!(updated.status, "Closed");

        let fetched = repo.get_by_claim_id("CLM-0001").await.unwrap();
        assert_eq!(fetched.status, "Closed");
    }

    #[tokio::test]
    async fn update_unknown_claim_is_not_found_and_mutates_nothing() {
        let repo = ClaimsRepository::new(memory_pool().await);
        repo.replace_all(&claims_with_scores(&[50])).await.unwrap();

        let err = repo.update_status("CLM-9999", ClaimStatus::Closed).await.unwrap_err();
        assert!(err.is_not_found());

        let records = repo.list(&ClaimFilter::default()).await.unwrap();
        assert!(records.iter().all(|r| r.status == "New"));
    }
}

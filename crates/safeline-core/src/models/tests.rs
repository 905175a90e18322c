#[cfg(test)]
mod model_tests {
    use crate::models::{
        role_rank, superior_approvers, ApprovalSettings, ApprovalStatus, DocumentSetting,
        ReceivedApprovalItem, SentApprovalItem,
    };

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn create_test_sent(status: ApprovalStatus, current_step: usize) -> SentApprovalItem {
        SentApprovalItem {
            id: 7,
            date: "2024-03-05".to_string(),
            title: "3월 TBM 일지".to_string(),
            document_type: "TBM".to_string(),
            drafter: "김안전".to_string(),
            approvers: roles(&["안전관리자", "안전보건관리책임자", "경영책임자"]),
            current_step,
            status,
        }
    }

    #[test]
    fn test_status_round_trips_through_korean_label() {
        for status in [
            ApprovalStatus::Pending,
            ApprovalStatus::InProgress,
            ApprovalStatus::Completed,
            ApprovalStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ApprovalStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_parses_english_names() {
        assert_eq!("pending".parse::<ApprovalStatus>(), Ok(ApprovalStatus::Pending));
        assert_eq!("in_progress".parse::<ApprovalStatus>(), Ok(ApprovalStatus::InProgress));
        assert_eq!("Completed".parse::<ApprovalStatus>(), Ok(ApprovalStatus::Completed));
        assert_eq!("REJECTED".parse::<ApprovalStatus>(), Ok(ApprovalStatus::Rejected));
        assert!("approved".parse::<ApprovalStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_as_korean_label() {
        let json = serde_json::to_string(&ApprovalStatus::InProgress).unwrap();
        assert_eq!(json, "\"결재중\"");
        let status: ApprovalStatus = serde_json::from_str("\"반려\"").unwrap();
        assert_eq!(status, ApprovalStatus::Rejected);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!ApprovalStatus::Pending.is_terminal());
        assert!(!ApprovalStatus::InProgress.is_terminal());
        assert!(ApprovalStatus::Completed.is_terminal());
        assert!(ApprovalStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_role_rank() {
        assert_eq!(role_rank("관리감독자"), Some(0));
        assert_eq!(role_rank("경영책임자"), Some(4));
        assert_eq!(role_rank("협력업체"), None);
    }

    #[test]
    fn test_superior_approvers_drops_lower_ranked() {
        let chain = superior_approvers(
            "안전관리자",
            &roles(&["관리감독자", "안전보건관리책임자", "경영책임자"]),
        );
        assert_eq!(chain, roles(&["안전보건관리책임자", "경영책임자"]));
    }

    #[test]
    fn test_superior_approvers_drops_equal_rank_and_unknown_roles() {
        let chain = superior_approvers("보건관리자", &roles(&["보건관리자", "외부감사", "경영책임자"]));
        assert_eq!(chain, roles(&["경영책임자"]));
    }

    #[test]
    fn test_superior_approvers_for_unranked_requester() {
        let chain = superior_approvers("협력업체", &roles(&["관리감독자", "외부감사"]));
        assert_eq!(chain, roles(&["관리감독자"]));
    }

    #[test]
    fn test_superior_approvers_top_of_hierarchy_is_empty() {
        let chain = superior_approvers("경영책임자", &roles(&["관리감독자", "경영책임자"]));
        assert!(chain.is_empty());
    }

    #[test]
    fn test_sent_progress_and_final_approver() {
        let sent = create_test_sent(ApprovalStatus::InProgress, 1);
        assert_eq!(sent.progress(), "1/3");
        assert_eq!(sent.final_approver(), Some("경영책임자"));
        assert_eq!(sent.current_approver(), Some("안전보건관리책임자"));
    }

    #[test]
    fn test_sent_current_approver_none_when_terminal() {
        assert_eq!(
            create_test_sent(ApprovalStatus::Rejected, 0).current_approver(),
            None
        );
        assert_eq!(
            create_test_sent(ApprovalStatus::Completed, 3).current_approver(),
            None
        );
    }

    #[test]
    fn test_received_is_active() {
        let mut received = ReceivedApprovalItem {
            id: 8,
            date: "2024-03-05".to_string(),
            document_type: "TBM".to_string(),
            content: "3월 TBM 일지".to_string(),
            drafter: "김안전".to_string(),
            approver: "안전관리자".to_string(),
            step: 0,
            status: ApprovalStatus::Pending,
            sent_approval_id: 7,
        };
        assert!(received.is_active());
        received.status = ApprovalStatus::Completed;
        assert!(!received.is_active());
    }

    #[test]
    fn test_default_settings_resolve_lines() {
        let settings = ApprovalSettings::default();
        assert!(settings.is_approval_required("TBM"));
        assert!(!settings.is_approval_required("안전교육"));
        assert!(!settings.is_approval_required("회의록"));

        let line = settings.approval_line("위험성평가").unwrap();
        assert_eq!(line.id, "executive");
        assert_eq!(line.approvers.last().map(String::as_str), Some("경영책임자"));
        assert!(settings.approval_line("회의록").is_none());
    }

    #[test]
    fn test_approval_line_missing_when_line_id_unset() {
        let mut settings = ApprovalSettings::default();
        settings.documents.insert(
            "회의록".to_string(),
            DocumentSetting {
                use_approval: true,
                approval_line_id: None,
            },
        );
        assert!(settings.is_approval_required("회의록"));
        assert!(settings.approval_line("회의록").is_none());
    }
}

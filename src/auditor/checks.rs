//! The static audit checks.
//!
//! Every check is a fixed advisory: it always produces exactly one finding
//! and never inspects the audited path. The audit surfaces baseline hygiene
//! reminders; it does not compute them from the target.

use crate::report::format::{Category, Finding, FindingKind, Severity};

/// The four security checks, in fixed order
pub fn security() -> Vec<Finding> {
    vec![
        encryption(),
        access_controls(),
        network_security(),
        secrets_management(),
    ]
}

/// The three optimization checks, in fixed order
pub fn optimization() -> Vec<Finding> {
    vec![resource_utilization(), cost_optimization(), performance()]
}

/// The two compliance checks, in fixed order
pub fn compliance() -> Vec<Finding> {
    vec![audit_logging(), backup_recovery()]
}

fn encryption() -> Finding {
    Finding {
        kind: FindingKind::Security,
        severity: Some(Severity::Medium),
        category: Some(Category::Encryption),
        message: "Ensure data encryption is enabled for all storage resources".to_string(),
        recommendation: Some("Enable encryption at rest for all data storage".to_string()),
    }
}

fn access_controls() -> Finding {
    Finding {
        kind: FindingKind::Security,
        severity: Some(Severity::High),
        category: Some(Category::AccessControl),
        message: "Review IAM policies for least privilege access".to_string(),
        recommendation: Some("Implement role-based access control (RBAC)".to_string()),
    }
}

fn network_security() -> Finding {
    Finding {
        kind: FindingKind::Security,
        severity: Some(Severity::Medium),
        category: Some(Category::Network),
        message: "Verify network segmentation and firewall rules".to_string(),
        recommendation: Some("Implement network isolation for sensitive resources".to_string()),
    }
}

fn secrets_management() -> Finding {
    Finding {
        kind: FindingKind::Security,
        severity: Some(Severity::High),
        category: Some(Category::Secrets),
        message: "Ensure secrets are stored securely".to_string(),
        recommendation: Some("Use a secrets management service for sensitive data".to_string()),
    }
}

fn resource_utilization() -> Finding {
    Finding {
        kind: FindingKind::Optimization,
        severity: Some(Severity::Low),
        category: Some(Category::Resources),
        message: "Monitor resource utilization for right-sizing opportunities".to_string(),
        recommendation: Some("Implement auto-scaling based on actual usage patterns".to_string()),
    }
}

fn cost_optimization() -> Finding {
    Finding {
        kind: FindingKind::Optimization,
        severity: Some(Severity::Low),
        category: Some(Category::Cost),
        message: "Review resource costs for optimization opportunities".to_string(),
        recommendation: Some(
            "Consider reserved instances or spot instances for cost savings".to_string(),
        ),
    }
}

fn performance() -> Finding {
    Finding {
        kind: FindingKind::Optimization,
        severity: Some(Severity::Low),
        category: Some(Category::Performance),
        message: "Review performance metrics and optimization opportunities".to_string(),
        recommendation: Some("Implement caching and CDN for improved performance".to_string()),
    }
}

fn audit_logging() -> Finding {
    Finding {
        kind: FindingKind::Compliance,
        severity: Some(Severity::Medium),
        category: Some(Category::Logging),
        message: "Ensure audit logging is enabled for compliance".to_string(),
        recommendation: Some("Enable comprehensive audit logging for all resources".to_string()),
    }
}

fn backup_recovery() -> Finding {
    Finding {
        kind: FindingKind::Compliance,
        severity: Some(Severity::Medium),
        category: Some(Category::Backup),
        message: "Verify backup and disaster recovery procedures".to_string(),
        recommendation: Some("Implement automated backup and recovery processes".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_group_sizes() {
        assert_eq!(security().len(), 4);
        assert_eq!(optimization().len(), 3);
        assert_eq!(compliance().len(), 2);
    }

    #[test]
    fn security_severities_in_order() {
        let severities: Vec<_> = security().iter().filter_map(|f| f.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Medium,
                Severity::High,
                Severity::Medium,
                Severity::High
            ]
        );
    }

    #[test]
    fn optimization_findings_are_low_severity() {
        assert!(optimization()
            .iter()
            .all(|f| f.severity == Some(Severity::Low) && f.kind == FindingKind::Optimization));
    }

    #[test]
    fn compliance_findings_are_medium_severity() {
        assert!(compliance()
            .iter()
            .all(|f| f.severity == Some(Severity::Medium) && f.kind == FindingKind::Compliance));
    }

    #[test]
    fn every_check_carries_a_recommendation() {
        for finding in security()
            .into_iter()
            .chain(optimization())
            .chain(compliance())
        {
            assert!(finding.recommendation.is_some(), "{}", finding.message);
        }
    }
}

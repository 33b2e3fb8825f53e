use runsum_report::{Group, Summary};

/// True when any check anywhere in the group tree recorded a failure.
pub(crate) fn checks_failed(group: &Group) -> bool {
    group.checks.iter().any(|c| !c.is_green()) || group.groups.iter().any(checks_failed)
}

/// True when any metric carries a threshold expression that did not hold.
pub(crate) fn thresholds_failed(summary: &Summary) -> bool {
    summary
        .metrics
        .values()
        .any(|m| m.has_thresholds() && !m.thresholds_ok())
}

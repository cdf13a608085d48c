use crate::api::{NodeRecord, PodRecord};

/// Three labelled counts in a fixed category order
pub type StatusSummary = [String; 3];

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStatusCounts {
    pub no_connection: usize,
    pub not_ready: usize,
    pub ready: usize,
}

impl NodeStatusCounts {
    /// Anything other than `Ready` or `NotReady`, a missing status included,
    /// counts as no connection.
    pub fn compute_from_nodes(nodes: &[NodeRecord]) -> Self {
        let mut counts = NodeStatusCounts::default();

        for node in nodes {
            match node.status.as_deref() {
                Some("Ready") => counts.ready += 1,
                Some("NotReady") => counts.not_ready += 1,
                _ => counts.no_connection += 1,
            }
        }

        counts
    }

    pub fn summary(&self) -> StatusSummary {
        [
            format!("No Connection: {}", self.no_connection),
            format!("Not Ready: {}", self.not_ready),
            format!("Ready: {}", self.ready),
        ]
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PodStatusCounts {
    pub error: usize,
    pub pending: usize,
    pub running: usize,
}

impl PodStatusCounts {
    /// `Error` is a catch-all: `Succeeded`, `Failed`, unknown and missing
    /// statuses all land there.
    pub fn compute_from_pods(pods: &[PodRecord]) -> Self {
        let mut counts = PodStatusCounts::default();

        for pod in pods {
            match pod.status.as_deref() {
                Some("Running") => counts.running += 1,
                Some("Pending") => counts.pending += 1,
                _ => counts.error += 1,
            }
        }

        counts
    }

    pub fn summary(&self) -> StatusSummary {
        [
            format!("Error: {}", self.error),
            format!("Pending: {}", self.pending),
            format!("Running: {}", self.running),
        ]
    }
}

/// Summarise node readiness; an absent list is treated as empty
pub fn aggregate_node_status(nodes: Option<&[NodeRecord]>) -> StatusSummary {
    NodeStatusCounts::compute_from_nodes(nodes.unwrap_or_default()).summary()
}

/// Summarise pod phases; an absent list is treated as empty
pub fn aggregate_pod_status(pods: Option<&[PodRecord]>) -> StatusSummary {
    PodStatusCounts::compute_from_pods(pods.unwrap_or_default()).summary()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(statuses: &[Option<&str>]) -> Vec<NodeRecord> {
        statuses
            .iter()
            .map(|status| NodeRecord {
                status: status.map(str::to_string),
            })
            .collect()
    }

    fn pods(statuses: &[Option<&str>]) -> Vec<PodRecord> {
        statuses
            .iter()
            .map(|status| PodRecord {
                status: status.map(str::to_string),
            })
            .collect()
    }

    #[test]
    fn test_node_summary_empty_or_absent() {
        let expected = ["No Connection: 0", "Not Ready: 0", "Ready: 0"];
        assert_eq!(aggregate_node_status(None), expected);
        assert_eq!(aggregate_node_status(Some(&[][..])), expected);
    }

    #[test]
    fn test_node_summary_mixed_statuses() {
        let input = nodes(&[Some("Ready"), Some("Ready"), Some("NotReady"), Some("Bogus")]);
        assert_eq!(
            aggregate_node_status(Some(input.as_slice())),
            ["No Connection: 1", "Not Ready: 1", "Ready: 2"]
        );
    }

    #[test]
    fn test_node_status_match_is_exact() {
        let input = nodes(&[Some("ready"), Some("Ready "), Some("NOTREADY"), None, Some("")]);
        let counts = NodeStatusCounts::compute_from_nodes(&input);

        assert_eq!(counts.no_connection, 5);
        assert_eq!(counts.ready, 0);
        assert_eq!(counts.not_ready, 0);
    }

    #[test]
    fn test_pod_summary_empty_or_absent() {
        let expected = ["Error: 0", "Pending: 0", "Running: 0"];
        assert_eq!(aggregate_pod_status(None), expected);
        assert_eq!(aggregate_pod_status(Some(&[][..])), expected);
    }

    #[test]
    fn test_pod_summary_mixed_statuses() {
        let input = pods(&[Some("Running"), Some("Pending"), Some("Pending"), Some("CrashLoopBackOff")]);
        assert_eq!(
            aggregate_pod_status(Some(input.as_slice())),
            ["Error: 1", "Pending: 2", "Running: 1"]
        );
    }

    #[test]
    fn test_succeeded_pods_count_as_errors() {
        let input = pods(&[Some("Succeeded"), Some("Failed"), None, Some("Running")]);
        let counts = PodStatusCounts::compute_from_pods(&input);

        assert_eq!(counts.error, 3);
        assert_eq!(counts.running, 1);
    }

    #[test]
    fn test_counts_sum_to_input_length() {
        let statuses = [
            Some("Ready"), Some("NotReady"), Some("Running"), Some("Pending"),
            None, Some("Unknown"), Some("Ready"), Some("Pending"), Some("Running"),
        ];

        for len in 0..=statuses.len() {
            let slice = &statuses[..len];
            let node_counts = NodeStatusCounts::compute_from_nodes(&nodes(slice));
            let pod_counts = PodStatusCounts::compute_from_pods(&pods(slice));

            assert_eq!(node_counts.no_connection + node_counts.not_ready + node_counts.ready, len);
            assert_eq!(pod_counts.error + pod_counts.pending + pod_counts.running, len);
        }
    }

    #[test]
    fn test_order_independent_and_idempotent() {
        let mut node_input = nodes(&[Some("Ready"), Some("NotReady"), None, Some("Ready"), Some("Lost")]);
        let mut pod_input = pods(&[Some("Running"), Some("Evicted"), Some("Pending"), Some("Running")]);

        let node_summary = aggregate_node_status(Some(node_input.as_slice()));
        let pod_summary = aggregate_pod_status(Some(pod_input.as_slice()));

        assert_eq!(aggregate_node_status(Some(node_input.as_slice())), node_summary);
        assert_eq!(aggregate_pod_status(Some(pod_input.as_slice())), pod_summary);

        for _ in 0..node_input.len() {
            node_input.rotate_left(1);
            assert_eq!(aggregate_node_status(Some(node_input.as_slice())), node_summary);
        }
        node_input.reverse();
        assert_eq!(aggregate_node_status(Some(node_input.as_slice())), node_summary);

        for _ in 0..pod_input.len() {
            pod_input.rotate_left(1);
            assert_eq!(aggregate_pod_status(Some(pod_input.as_slice())), pod_summary);
        }
        pod_input.reverse();
        assert_eq!(aggregate_pod_status(Some(pod_input.as_slice())), pod_summary);
    }
}

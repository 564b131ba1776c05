use relay_common::prelude::*;

use crate::model::{ActiveState, CirculationHistory};

/// Fan-in synchronization of a parallel gateway.
pub struct ParallelJoinBarrier;

impl ParallelJoinBarrier {
    /// A branch has arrived once it has a record into `convergence_id`. A countersign branch
    /// has arrived only when every processor of its snapshot has such a record. The barrier opens
    /// when the only branch left is `source_id`, the one arriving now.
    ///
    /// History is scanned newest first and stops at the record that last opened the join, so
    /// arrivals of an earlier round through the same gateway do not count.
    pub fn is_passable<F>(
        active_states: &[ActiveState],
        history: &[CirculationHistory],
        convergence_id: &str,
        source_id: &str,
        is_countersign: F,
    ) -> bool
    where
        F: Fn(&ActiveState) -> bool,
    {
        let mut signers: HashMap<&str, HashSet<i64>> = HashMap::new();
        for entry in history.iter().filter(|x| x.target.eq(convergence_id)) {
            if !entry.held {
                break;
            }
            if let Some(state) = active_states.iter().find(|x| x.id == entry.source) {
                signers
                    .entry(state.id.as_str())
                    .or_default()
                    .insert(entry.processor_id);
            }
        }

        let pending = active_states
            .iter()
            .filter(|state| match signers.get(state.id.as_str()) {
                None => true,
                Some(acted) => {
                    is_countersign(state) && !state.processor.iter().all(|x| acted.contains(x))
                }
            })
            .map(|x| x.id.as_str())
            .collect::<Vec<_>>();

        let passable = pending.len() == 1 && pending[0] == source_id;
        debug!(
            "join into {}: branches still pending {:?}, passable: {}",
            convergence_id, pending, passable
        );
        passable
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn branch(id: &str, processor: Vec<i64>) -> ActiveState {
        ActiveState {
            id: id.into(),
            label: id.into(),
            processor,
            process_method: "person".into(),
        }
    }

    fn branches(ids: &[&str]) -> Vec<ActiveState> {
        ids.iter().map(|x| branch(x, vec![1])).collect()
    }

    fn record(source: &str, target: &str, processor_id: i64, held: bool) -> CirculationHistory {
        CirculationHistory {
            id: 0,
            work_order_id: 1,
            title: "t".into(),
            state: source.into(),
            source: source.into(),
            target: target.into(),
            circulation: InlineStr::default(),
            processor: "p".into(),
            processor_id,
            cost_duration: InlineStr::default(),
            held,
            created_at: Utc::now(),
        }
    }

    fn arrival(source: &str, target: &str) -> CirculationHistory {
        record(source, target, 1, true)
    }

    fn passable(
        active_states: &[ActiveState],
        history: &[CirculationHistory],
        source_id: &str,
    ) -> bool {
        ParallelJoinBarrier::is_passable(active_states, history, "merge", source_id, |_| false)
    }

    #[test]
    fn opens_on_last_arrival_only() {
        let branches = branches(&["a", "b", "c"]);

        assert!(!passable(&branches, &[], "a"));

        let history = vec![arrival("a", "merge")];
        assert!(!passable(&branches, &history, "b"));

        let history = vec![arrival("b", "merge"), arrival("x", "y"), arrival("a", "merge")];
        assert!(passable(&branches, &history, "c"));
    }

    #[test]
    fn repeated_arrival_does_not_open() {
        let branches = branches(&["a", "b"]);
        let history = vec![arrival("a", "merge"), arrival("a", "merge")];

        assert!(!passable(&branches, &history, "a"));
        assert!(passable(&branches, &history, "b"));
    }

    #[test]
    fn arrivals_elsewhere_are_ignored() {
        let branches = branches(&["a", "b"]);
        let history = vec![arrival("a", "other")];

        assert!(!passable(&branches, &history, "b"));
    }

    #[test]
    fn previous_round_is_not_counted() {
        let branches = branches(&["a", "b", "c"]);
        // newest first: second round has only "a" so far, the first round opened on "c"
        let history = vec![
            arrival("a", "merge"),
            record("start", "a", 1, false),
            record("merge", "start", 1, false),
            record("c", "merge", 1, false),
            arrival("b", "merge"),
            arrival("a", "merge"),
        ];

        assert!(!passable(&branches, &history, "c"));
        assert!(!passable(&branches, &history, "b"));
    }

    #[test]
    fn countersign_branch_waits_for_every_processor() {
        let branches = vec![branch("a", vec![31, 35]), branch("b", vec![32])];
        let is_countersign = |x: &ActiveState| x.id == "a";

        let history = vec![record("a", "merge", 31, true)];
        assert!(!ParallelJoinBarrier::is_passable(
            &branches,
            &history,
            "merge",
            "b",
            is_countersign
        ));

        let history = vec![record("a", "merge", 35, true), record("a", "merge", 31, true)];
        assert!(ParallelJoinBarrier::is_passable(
            &branches,
            &history,
            "merge",
            "b",
            is_countersign
        ));
    }
}

/// Scores of finished runs in the order they were played. Lives only as long
/// as the process.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    history: Vec<u32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard::default()
    }

    pub fn record(&mut self, score: u32) {
        self.history.push(score);
    }

    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn best(&self) -> Option<u32> {
        self.history.iter().copied().max()
    }

    pub fn ranked_descending(&self) -> Vec<u32> {
        let mut ranked = self.history.clone();
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_leaves_history_alone() {
        let mut scores = Scoreboard::new();
        for s in [3, 10, 0, 7] {
            scores.record(s);
        }

        assert_eq!(scores.ranked_descending(), vec![10, 7, 3, 0]);
        assert_eq!(scores.history(), &[3, 10, 0, 7]);
        assert_eq!(scores.best(), Some(10));
        assert_eq!(scores.len(), 4);
    }

    #[test]
    fn test_empty() {
        let scores = Scoreboard::new();
        assert!(scores.is_empty());
        assert!(scores.ranked_descending().is_empty());
        assert_eq!(scores.best(), None);
    }
}

// crates/busstop-core/src/search.rs
use crate::index::BusStopIndex;
use crate::model::{BusStop, SearchHit};
use crate::text::{expand_synonyms, tokenize_with, SynonymTable, TextFolding};

impl BusStopIndex {
    /// Ranked free-text search over code, description and road name.
    ///
    /// - A blank query returns every stop in load order.
    /// - Otherwise the query is lowercased and tokenised (see
    ///   [`with_folding`](Self::with_folding) for accent-insensitive
    ///   matching), rewritten through `synonyms`, and
    ///   every stop with a non-zero [score](crate::score) is returned, highest
    ///   score first; equal scores keep load order.
    /// - `limit == 0` means no limit.
    ///
    /// ```
    /// use busstop_core::{BusStop, BusStopIndex, SynonymTable};
    ///
    /// let index = BusStopIndex::new(vec![
    ///     BusStop::new("01019", "Victoria St", "Bras Basah Cplx", 1.2967, 103.8525),
    ///     BusStop::new("93031", "Siglap Link", "Victoria Sch", 1.3087, 103.9288),
    /// ]);
    /// let codes: Vec<&str> = index
    ///     .search("victoria", &SynonymTable::new(), 0)
    ///     .into_iter()
    ///     .map(|s| s.code())
    ///     .collect();
    /// assert_eq!(codes, vec!["93031", "01019"]);
    /// ```
    pub fn search(&self, query: &str, synonyms: &SynonymTable, limit: usize) -> Vec<&BusStop> {
        self.search_scored(query, synonyms, limit)
            .into_iter()
            .map(|hit| hit.stop)
            .collect()
    }

    /// Same as [`search`](Self::search), keeping each hit's score.
    pub fn search_scored(
        &self,
        query: &str,
        synonyms: &SynonymTable,
        limit: usize,
    ) -> Vec<SearchHit<'_>> {
        let tokens = tokenize_with(self.folding(), query);
        if tokens.is_empty() {
            return self
                .iter()
                .take(effective_limit(limit, self.len()))
                .map(|stop| SearchHit { score: 0, stop })
                .collect();
        }

        let mut tokens = expand_synonyms(tokens, synonyms);
        if self.folding() == TextFolding::Transliterate {
            // Synonym values are only lowercased.
            for token in &mut tokens {
                *token = self.folding().fold(token);
            }
        }
        tracing::trace!(tokens = tokens.len(), "searching bus stops");

        // Hits are produced in load order, so position breaks score ties.
        let mut hits: Vec<(usize, SearchHit<'_>)> = self
            .entries()
            .enumerate()
            .filter_map(|(pos, (stop, keys))| {
                let score = keys.score(tokens.as_slice());
                (score > 0).then_some((pos, SearchHit { score, stop }))
            })
            .collect();

        hits.sort_by(|(pa, a), (pb, b)| b.score.cmp(&a.score).then(pa.cmp(pb)));
        hits.truncate(effective_limit(limit, hits.len()));
        tracing::trace!(hits = hits.len(), "search done");

        hits.into_iter().map(|(_, hit)| hit).collect()
    }
}

/// `0` means "no limit".
#[inline]
pub(crate) fn effective_limit(limit: usize, available: usize) -> usize {
    if limit == 0 {
        available
    } else {
        limit.min(available)
    }
}

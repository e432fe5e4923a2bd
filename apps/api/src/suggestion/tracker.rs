use std::collections::HashMap;

use crate::suggestion::SuggestionTarget;

/// Identifies one suggestion request. Only the newest ticket per site may
/// deliver a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct Site {
    latest: u64,
    suggestion: Option<String>,
}

/// Last-request-wins bookkeeping for suggestion sites. Stale network calls
/// are not cancelled; their results are simply refused here.
#[derive(Debug, Default)]
pub struct SuggestionTracker {
    issued: u64,
    sites: HashMap<SuggestionTarget, Site>,
}

impl SuggestionTracker {
    /// Starts a request for `target`, superseding any request in flight for it
    /// and discarding its parked suggestion.
    pub fn begin(&mut self, target: SuggestionTarget) -> Ticket {
        self.issued += 1;
        let site = self.sites.entry(target).or_default();
        site.latest = self.issued;
        site.suggestion = None;
        Ticket(self.issued)
    }

    pub fn is_current(&self, target: SuggestionTarget, ticket: Ticket) -> bool {
        self.sites
            .get(&target)
            .is_some_and(|site| site.latest == ticket.0)
    }

    /// Parks `text` if `ticket` is still the newest for the site. Returns
    /// whether it was kept.
    pub fn complete(&mut self, target: SuggestionTarget, ticket: Ticket, text: String) -> bool {
        match self.sites.get_mut(&target) {
            Some(site) if site.latest == ticket.0 => {
                site.suggestion = Some(text);
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn pending(&self, target: SuggestionTarget) -> Option<&str> {
        self.sites.get(&target)?.suggestion.as_deref()
    }

    /// Removes the parked suggestion for acceptance.
    pub fn take(&mut self, target: SuggestionTarget) -> Option<String> {
        self.sites.get_mut(&target)?.suggestion.take()
    }

    /// Forgets one site, e.g. after its entry was removed. A request still in
    /// flight for it will be refused.
    pub fn forget(&mut self, target: SuggestionTarget) {
        self.sites.remove(&target);
    }

    /// Forgets every site. Requests still in flight will be refused.
    pub fn clear(&mut self) {
        self.sites.clear();
    }
}

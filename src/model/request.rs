// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::error::NavError;

/// Independent request streams; a newer request only supersedes older ones on its own channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestChannel {
    Catalog,
    Search,
    Recommendation,
}

impl RequestChannel {
    const ALL: [RequestChannel; 3] = [Self::Catalog, Self::Search, Self::Recommendation];

    fn slot(self) -> usize {
        match self {
            Self::Catalog => 0,
            Self::Search => 1,
            Self::Recommendation => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Search => "search",
            Self::Recommendation => "recommendation",
        }
    }
}

/// Key attached to an in-flight request so its completion can be matched (or discarded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken {
    channel: RequestChannel,
    seq: u64,
}

impl RequestToken {
    pub fn channel(self) -> RequestChannel {
        self.channel
    }

    pub fn seq(self) -> u64 {
        self.seq
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.channel.as_str(), self.seq)
    }
}

/// Issues monotonically increasing tokens and accepts only the latest outstanding one per
/// channel. Accepting settles the token, so a duplicated completion is stale too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    next_seq: u64,
    outstanding: [Option<u64>; 3],
}

impl RequestTracker {
    pub fn issue(&mut self, channel: RequestChannel) -> RequestToken {
        self.next_seq = self.next_seq.saturating_add(1);
        self.outstanding[channel.slot()] = Some(self.next_seq);
        RequestToken {
            channel,
            seq: self.next_seq,
        }
    }

    pub fn accept(&mut self, token: RequestToken) -> Result<(), NavError> {
        let slot = &mut self.outstanding[token.channel.slot()];
        if *slot == Some(token.seq) {
            *slot = None;
            Ok(())
        } else {
            Err(NavError::StaleResponse { token })
        }
    }

    /// Invalidates whatever is in flight on `channel`.
    pub fn supersede(&mut self, channel: RequestChannel) {
        self.outstanding[channel.slot()] = None;
    }

    pub fn supersede_all(&mut self) {
        for channel in RequestChannel::ALL {
            self.supersede(channel);
        }
    }

    pub fn is_pending(&self, channel: RequestChannel) -> bool {
        self.outstanding[channel.slot()].is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{RequestChannel, RequestTracker};
    use crate::error::NavError;

    #[test]
    fn only_latest_token_is_accepted() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue(RequestChannel::Catalog);
        let second = tracker.issue(RequestChannel::Catalog);
        assert!(second.seq() > first.seq());

        assert_eq!(
            tracker.accept(first),
            Err(NavError::StaleResponse { token: first })
        );
        assert_eq!(tracker.accept(second), Ok(()));
        assert!(!tracker.is_pending(RequestChannel::Catalog));
    }

    #[test]
    fn accepted_token_cannot_be_replayed() {
        let mut tracker = RequestTracker::default();
        let token = tracker.issue(RequestChannel::Search);
        tracker.accept(token).expect("first delivery");
        assert!(tracker.accept(token).is_err());
    }

    #[test]
    fn channels_do_not_supersede_each_other() {
        let mut tracker = RequestTracker::default();
        let catalog = tracker.issue(RequestChannel::Catalog);
        let search = tracker.issue(RequestChannel::Search);
        assert_eq!(tracker.accept(catalog), Ok(()));
        assert_eq!(tracker.accept(search), Ok(()));
    }

    #[test]
    fn supersede_discards_in_flight_request() {
        let mut tracker = RequestTracker::default();
        let token = tracker.issue(RequestChannel::Recommendation);
        tracker.supersede(RequestChannel::Recommendation);
        assert!(tracker.accept(token).is_err());
        assert_eq!(token.to_string(), "recommendation#1");
    }
}

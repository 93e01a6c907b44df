use rand::Rng;
use rand::seq::SliceRandom;
use spotter_types::{SessionLog, Tier};
use tracing::debug;

use crate::log_catalog::{EASY_BOTS, HARD_BOTS, HUMANS, LogTemplate, MEDIUM_BOTS};

pub const DEFAULT_ROUND_SIZE: usize = 15;
const LOG_ID_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How many bots of each tier a round at a given difficulty contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMix {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl BotMix {
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Easy => BotMix {
                easy: 4,
                medium: 1,
                hard: 0,
            },
            Tier::Medium => BotMix {
                easy: 2,
                medium: 3,
                hard: 1,
            },
            Tier::Hard => BotMix {
                easy: 1,
                medium: 3,
                hard: 3,
            },
        }
    }

    /// Mix for a tag that names no tier
    pub fn fallback() -> Self {
        BotMix {
            easy: 3,
            medium: 2,
            hard: 0,
        }
    }

    /// Mix for a raw `difficulty` tag. A missing or empty tag means medium;
    /// any other unrecognised tag gets the fallback mix.
    pub fn for_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some("") => Self::for_tier(Tier::Medium),
            Some(tag) => Tier::from_tag(tag).map_or_else(Self::fallback, Self::for_tier),
        }
    }

    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }
}

/// Builds shuffled rounds of session logs from the template catalog
#[derive(Debug, Clone)]
pub struct LogSelector {
    round_size: usize,
}

impl Default for LogSelector {
    fn default() -> Self {
        Self::new(DEFAULT_ROUND_SIZE)
    }
}

impl LogSelector {
    pub fn new(round_size: usize) -> Self {
        Self { round_size }
    }

    pub fn round_size(&self) -> usize {
        self.round_size
    }

    pub fn select(&self, tier: Tier) -> Vec<SessionLog> {
        self.select_with_rng(tier, &mut rand::rng())
    }

    pub fn select_mix(&self, mix: BotMix) -> Vec<SessionLog> {
        self.select_mix_with_rng(mix, &mut rand::rng())
    }

    pub fn select_with_rng<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> Vec<SessionLog> {
        self.select_mix_with_rng(BotMix::for_tier(tier), rng)
    }

    /// Bots by tier, humans filling the rest, shuffled and then cut to size.
    /// A round smaller than the bot mix is a random subset of the bots.
    pub fn select_mix_with_rng<R: Rng + ?Sized>(
        &self,
        mix: BotMix,
        rng: &mut R,
    ) -> Vec<SessionLog> {
        let mut logs = Vec::with_capacity(self.round_size);

        push_round_robin(&mut logs, EASY_BOTS, mix.easy, rng);
        push_round_robin(&mut logs, MEDIUM_BOTS, mix.medium, rng);
        push_round_robin(&mut logs, HARD_BOTS, mix.hard, rng);

        let human_count = self.round_size.saturating_sub(mix.total());
        push_round_robin(&mut logs, HUMANS, human_count, rng);

        logs.shuffle(rng);
        logs.truncate(self.round_size);

        debug!(
            "Selected {} logs for {:?} ({} bots)",
            logs.len(),
            mix,
            logs.iter().filter(|l| l.is_bot).count()
        );
        logs
    }
}

fn push_round_robin<R: Rng + ?Sized>(
    logs: &mut Vec<SessionLog>,
    templates: &[LogTemplate],
    count: usize,
    rng: &mut R,
) {
    for template in templates.iter().cycle().take(count) {
        logs.push(template.instantiate(random_id(rng, LOG_ID_LEN)));
    }
}

/// Lowercase base-36 id of the given length
pub fn random_id<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

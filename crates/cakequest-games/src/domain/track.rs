//! Birthday Board — a four-token track race with bumping.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use cakequest_core::clock::Clock;
use cakequest_core::error::GameError;
use cakequest_core::game::{GameId, GameModule};
use cakequest_core::input::PlayerInput;
use cakequest_core::mount::{Element, Mount};
use cakequest_core::outcome::GameOutcome;
use cakequest_core::rng::DeterministicRng;
use cakequest_core::signal::{GameSignal, SignalKind};

/// A token finishes once its position reaches this length.
pub const TRACK_LENGTH: i32 = 20;

/// Sentinel position of a token waiting at home.
pub const HOME_POSITION: i32 = -1;

/// Sentinel position of a finished token (vacated the track).
pub const FINISHED_POSITION: i32 = -2;

/// The four racers, in fixed turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenId {
    /// The human-controlled token.
    Player,
    /// First bot.
    BotA,
    /// Second bot.
    BotB,
    /// Third bot.
    BotC,
}

impl TokenId {
    /// Fixed turn rotation.
    pub const ORDER: [TokenId; 4] = [TokenId::Player, TokenId::BotA, TokenId::BotB, TokenId::BotC];

    /// Board glyph.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            TokenId::Player => 'P',
            TokenId::BotA => 'A',
            TokenId::BotB => 'B',
            TokenId::BotC => 'C',
        }
    }

    fn index(self) -> usize {
        match self {
            TokenId::Player => 0,
            TokenId::BotA => 1,
            TokenId::BotB => 2,
            TokenId::BotC => 3,
        }
    }
}

/// One racer's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Track position, or a home/finished sentinel.
    pub position: i32,
    /// Waiting at home; entry requires rolling exactly six.
    pub at_home: bool,
    /// Reached the end of the track and vacated it.
    pub finished: bool,
}

impl Token {
    /// A token waiting at home.
    #[must_use]
    pub fn home() -> Self {
        Self {
            position: HOME_POSITION,
            at_home: true,
            finished: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum RacePhase {
    Racing,
    Concluded,
}

/// The Birthday Board game module.
#[derive(Debug)]
pub struct BirthdayBoard {
    instance_id: Uuid,
    tokens: [Token; 4],
    turn: usize,
    last_roll: Option<(TokenId, u32)>,
    phase: RacePhase,
    outcome: GameOutcome,
    pending_signals: Vec<GameSignal>,
}

impl BirthdayBoard {
    /// Creates a fresh board with every token at home.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            tokens: [Token::home(); 4],
            turn: 0,
            last_roll: None,
            phase: RacePhase::Racing,
            outcome: GameOutcome::Pending,
            pending_signals: Vec::new(),
        }
    }

    /// The state of one token.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Token {
        self.tokens[id.index()]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> TokenId {
        TokenId::ORDER[self.turn]
    }

    /// The most recent die roll, if any.
    #[must_use]
    pub fn last_roll(&self) -> Option<(TokenId, u32)> {
        self.last_roll
    }

    fn push_signal(&mut self, clock: &dyn Clock, kind: SignalKind) {
        self.pending_signals
            .push(GameSignal::new(GameId::Track, self.instance_id, clock, kind));
    }

    /// First terminal transition wins; a second attempt is a no-op.
    fn conclude(&mut self, outcome: GameOutcome, clock: &dyn Clock) {
        if self.outcome.is_terminal() {
            debug!(game = GameId::Track.as_str(), "duplicate conclusion ignored");
            return;
        }
        self.outcome = outcome;
        if outcome == GameOutcome::Success {
            self.push_signal(clock, SignalKind::PieceEarned);
        }
        self.push_signal(clock, SignalKind::Concluded { outcome });
        self.phase = RacePhase::Concluded;
    }

    /// Applies one roll to one token: home entry on a six, advance,
    /// finish past the track end, bump whoever the mover lands on.
    #[allow(clippy::cast_possible_wrap)]
    fn move_token(&mut self, id: TokenId, roll: u32) {
        let idx = id.index();
        if self.tokens[idx].at_home {
            if roll == 6 {
                self.tokens[idx].at_home = false;
                self.tokens[idx].position = 0;
            } else {
                // Entry requires exactly a six; the roll is spent.
                return;
            }
        } else {
            // A die roll fits in i32.
            self.tokens[idx].position += roll as i32;
            if self.tokens[idx].position >= TRACK_LENGTH {
                self.tokens[idx].finished = true;
                self.tokens[idx].position = FINISHED_POSITION;
            }
        }

        let landing = self.tokens[idx].position;
        if landing >= 0 {
            for other in TokenId::ORDER {
                if other == id {
                    continue;
                }
                let o = other.index();
                if self.tokens[o].position == landing && !self.tokens[o].finished {
                    debug!(bumped = ?other, by = ?id, position = landing, "token bumped home");
                    self.tokens[o] = Token::home();
                }
            }
        }
    }

    fn roll(&mut self, clock: &dyn Clock, rng: &mut dyn DeterministicRng) -> Result<(), GameError> {
        if !matches!(self.phase, RacePhase::Racing) {
            return Err(GameError::InputNotApplicable(
                "the race is already over".to_owned(),
            ));
        }
        let current = self.current_turn();
        let roll = rng.next_u32_range(1, 6);
        self.last_roll = Some((current, roll));
        self.move_token(current, roll);

        if self.token(TokenId::Player).finished {
            self.conclude(GameOutcome::Success, clock);
            return Ok(());
        }
        // A six grants the same token another turn.
        if roll != 6 {
            self.turn = (self.turn + 1) % TokenId::ORDER.len();
        }
        Ok(())
    }

    fn end_game(&mut self, clock: &dyn Clock) -> Result<(), GameError> {
        if !matches!(self.phase, RacePhase::Racing) {
            return Err(GameError::InputNotApplicable(
                "the race is already over".to_owned(),
            ));
        }
        self.conclude(GameOutcome::Failure, clock);
        Ok(())
    }
}

impl Default for BirthdayBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl GameModule for BirthdayBoard {
    fn game_id(&self) -> GameId {
        GameId::Track
    }

    fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    fn handle_input(
        &mut self,
        input: &PlayerInput,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), GameError> {
        match input {
            PlayerInput::Roll => self.roll(clock, rng),
            PlayerInput::Continue => self.end_game(clock),
            other => Err(GameError::InputNotApplicable(format!(
                "the birthday board has no use for {other:?}"
            ))),
        }
    }

    fn project(&self, mount: &mut dyn Mount) {
        if matches!(self.phase, RacePhase::Concluded) {
            return;
        }
        mount.append(Element::Heading("Birthday Board".to_owned()));
        mount.append(Element::Text(
            "Roll the die and move your token. Bump others back to start!".to_owned(),
        ));
        for index in 0..TRACK_LENGTH {
            let tokens = TokenId::ORDER
                .into_iter()
                .filter(|id| {
                    let token = self.token(*id);
                    token.position == index && !token.at_home && !token.finished
                })
                .map(TokenId::glyph)
                .collect();
            mount.append(Element::TrackSpace {
                index: u32::try_from(index).expect("track index is non-negative"),
                tokens,
            });
        }
        let status = match self.last_roll {
            Some((id, roll)) => format!(
                "{} rolled a {roll}. Turn: {}",
                id.glyph(),
                self.current_turn().glyph()
            ),
            None => format!("Turn: {}", self.current_turn().glyph()),
        };
        mount.append(Element::Status(status));
        mount.append(Element::Button {
            id: "roll".to_owned(),
            label: "Roll Die".to_owned(),
        });
        mount.append(Element::Button {
            id: "end-game".to_owned(),
            label: "End Game".to_owned(),
        });
    }

    fn pending_signals(&self) -> &[GameSignal] {
        &self.pending_signals
    }

    fn drain_signals(&mut self) -> Vec<GameSignal> {
        std::mem::take(&mut self.pending_signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cakequest_test_support::{FixedClock, SequenceRng};
    use chrono::{TimeZone, Utc};

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn roll(board: &mut BirthdayBoard, rng: &mut SequenceRng) {
        board
            .handle_input(&PlayerInput::Roll, &fixed_clock(), rng)
            .unwrap();
    }

    #[test]
    fn test_home_entry_requires_a_six() {
        let mut board = BirthdayBoard::new();
        let mut rng = SequenceRng::new(vec![3]);
        roll(&mut board, &mut rng);

        let player = board.token(TokenId::Player);
        assert!(player.at_home);
        assert_eq!(player.position, HOME_POSITION);
        // The failed entry spends the turn.
        assert_eq!(board.current_turn(), TokenId::BotA);
    }

    #[test]
    fn test_six_enters_at_zero_and_keeps_the_turn() {
        let mut board = BirthdayBoard::new();
        let mut rng = SequenceRng::new(vec![6]);
        roll(&mut board, &mut rng);

        let player = board.token(TokenId::Player);
        assert!(!player.at_home);
        assert_eq!(player.position, 0);
        // Rolling a six does not advance the turn order.
        assert_eq!(board.current_turn(), TokenId::Player);
    }

    #[test]
    fn test_bump_sends_occupant_home() {
        let mut board = BirthdayBoard::new();
        // Player enters (6) and advances 4 → position 4; turn passes.
        // BotA enters (6), advances 4 → lands on the player at 4.
        let mut rng = SequenceRng::new(vec![6, 4, 6, 4]);
        for _ in 0..4 {
            roll(&mut board, &mut rng);
        }

        let player = board.token(TokenId::Player);
        assert!(player.at_home);
        assert_eq!(player.position, HOME_POSITION);
        let bot = board.token(TokenId::BotA);
        assert_eq!(bot.position, 4);
        assert!(!bot.at_home);
    }

    #[test]
    fn test_finishing_vacates_the_track() {
        let mut board = BirthdayBoard::new();
        board.tokens[TokenId::BotA.index()] = Token {
            position: 18,
            at_home: false,
            finished: false,
        };
        board.turn = TokenId::BotA.index();

        let mut rng = SequenceRng::new(vec![4]);
        roll(&mut board, &mut rng);

        let bot = board.token(TokenId::BotA);
        assert!(bot.finished);
        assert_eq!(bot.position, FINISHED_POSITION);
        // A bot finishing does not end the race.
        assert_eq!(board.outcome(), GameOutcome::Pending);
    }

    #[test]
    fn test_player_finishing_wins_the_race() {
        let mut board = BirthdayBoard::new();
        board.tokens[TokenId::Player.index()] = Token {
            position: 17,
            at_home: false,
            finished: false,
        };

        let mut rng = SequenceRng::new(vec![5]);
        roll(&mut board, &mut rng);

        assert_eq!(board.outcome(), GameOutcome::Success);
        let signals = board.drain_signals();
        assert!(
            signals
                .iter()
                .any(|s| matches!(s.kind, SignalKind::PieceEarned))
        );
    }

    #[test]
    fn test_finished_token_is_not_bumped() {
        let mut board = BirthdayBoard::new();
        board.tokens[TokenId::BotB.index()] = Token {
            position: FINISHED_POSITION,
            at_home: false,
            finished: true,
        };
        board.tokens[TokenId::Player.index()] = Token {
            position: 3,
            at_home: false,
            finished: false,
        };

        let mut rng = SequenceRng::new(vec![2]);
        roll(&mut board, &mut rng);

        // Position 5 is empty; the finished token is untouched.
        let bot = board.token(TokenId::BotB);
        assert!(bot.finished);
        assert_eq!(bot.position, FINISHED_POSITION);
    }

    #[test]
    fn test_turn_rotates_through_all_tokens() {
        let mut board = BirthdayBoard::new();
        let mut rng = SequenceRng::new(vec![1, 2, 3, 4, 5]);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(board.current_turn());
            roll(&mut board, &mut rng);
        }
        assert_eq!(
            seen,
            vec![
                TokenId::Player,
                TokenId::BotA,
                TokenId::BotB,
                TokenId::BotC,
                TokenId::Player
            ]
        );
    }

    #[test]
    fn test_end_game_concludes_without_award() {
        let mut board = BirthdayBoard::new();
        let mut rng = SequenceRng::new(vec![]);
        board
            .handle_input(&PlayerInput::Continue, &fixed_clock(), &mut rng)
            .unwrap();

        assert_eq!(board.outcome(), GameOutcome::Failure);
        let signals = board.drain_signals();
        assert!(
            !signals
                .iter()
                .any(|s| matches!(s.kind, SignalKind::PieceEarned))
        );
        // Further rolls are rejected.
        let result = board.handle_input(&PlayerInput::Roll, &fixed_clock(), &mut rng);
        assert!(result.is_err());
    }
}

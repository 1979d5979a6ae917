//! The round state machine.
//!
//! A [`RoundController`] owns all state of one game and is driven by three
//! inputs: player joins, player events and timer expiries. Each input either
//! is rejected with no state change, or is applied and leaves a batch of
//! [`Effect`]s for the session to carry out.

use std::fmt;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::board::{Board, Direction, Goal, GoalSequence, RobotColor};
use crate::config::{GameConfig, Settings};
use crate::error::{BoardError, Rejection, RoundResult};
use crate::round::{
    Bid, BidLedger, BidPlacement, ClientEvent, GameId, MAX_CHAT_LEN, MIN_BID_MOVES, Notification,
    Player, PlayerId, PlayerRegistry, TimerKind, TimerSlot, TimerToken,
};

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the host to start.
    Join,
    /// Players are bidding on the current goal.
    Bidding,
    /// The best bidder is demonstrating.
    Demonstrating,
    /// The game is over.
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Join => "join",
            Phase::Bidding => "bidding",
            Phase::Demonstrating => "demonstration",
            Phase::Ended => "end",
        };
        f.write_str(name)
    }
}

/// Something the session must do after an input was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send to every player of the game.
    Broadcast(Notification),
    /// Send to one player.
    SendTo(PlayerId, Notification),
    /// Schedule `token` to be fed back after `duration`, replacing any
    /// scheduled timer.
    ArmTimer {
        /// Token to hand back to [`RoundController::on_timer`].
        token: TimerToken,
        /// Delay before it fires.
        duration: Duration,
    },
    /// Drop the scheduled timer.
    CancelTimer,
    /// A player left the game.
    PlayerRemoved(PlayerId),
    /// The game reached its end.
    GameEnded,
}

/// State machine for one game.
#[derive(Debug)]
pub struct RoundController {
    id: GameId,
    host: PlayerId,
    config: GameConfig,
    board: Board,
    goals: GoalSequence,
    bids: BidLedger,
    players: PlayerRegistry,
    phase: Phase,
    round: u32,
    goal: Option<Goal>,
    bid: Option<Bid>,
    timer: TimerSlot,
    created: Instant,
    effects: Vec<Effect>,
}

impl RoundController {
    /// Create a game on the given board and goal order.
    #[must_use]
    pub fn new(
        id: GameId,
        host: PlayerId,
        config: GameConfig,
        board: Board,
        goals: GoalSequence,
    ) -> Self {
        Self {
            id,
            host,
            config,
            board,
            goals,
            bids: BidLedger::new(),
            players: PlayerRegistry::new(),
            phase: Phase::Join,
            round: 0,
            goal: None,
            bid: None,
            timer: TimerSlot::default(),
            created: Instant::now(),
            effects: Vec::new(),
        }
    }

    /// Create a game from settings: random robots and shuffled goals.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be built.
    pub fn from_settings(
        id: GameId,
        host: PlayerId,
        settings: &Settings,
    ) -> Result<Self, BoardError> {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::new(settings.board_setup, &mut rng)?;
        let goals = GoalSequence::shuffled(board.goals(), &mut rng);
        Ok(Self::new(id, host, settings.game, board, goals))
    }

    /// Game identifier.
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// The player allowed to start and configure the game.
    #[must_use]
    pub const fn host(&self) -> PlayerId {
        self.host
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Current round number, 0 before the game starts.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Round settings.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Goal of the current round.
    #[must_use]
    pub const fn current_goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    /// Bid being demonstrated, with its remaining moves.
    #[must_use]
    pub const fn current_bid(&self) -> Option<&Bid> {
        self.bid.as_ref()
    }

    /// Bids still waiting this round.
    #[must_use]
    pub const fn bids(&self) -> &BidLedger {
        &self.bids
    }

    /// Players of this game.
    #[must_use]
    pub const fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Goals not drawn yet.
    #[must_use]
    pub fn goals_remaining(&self) -> usize {
        self.goals.remaining()
    }

    /// The live timer, if any.
    #[must_use]
    pub fn live_timer(&self) -> Option<(TimerToken, TimerKind)> {
        self.timer.live()
    }

    /// Take the effects produced since the last call.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Register a player and send them the board.
    ///
    /// # Errors
    ///
    /// Rejects duplicate ids and joins after the game ended.
    pub fn add_player(&mut self, id: PlayerId, name: impl Into<String>) -> RoundResult {
        if self.is_ended() {
            return Err(Rejection::GameOver);
        }
        if self.players.contains(id) {
            return Err(Rejection::AlreadyJoined(id));
        }

        let player = Player::new(id, name, id == self.host);
        let (name, is_host) = (player.name.clone(), player.is_host);
        self.broadcast(Notification::PlayerJoined {
            player: id,
            name: name.clone(),
        });
        self.players.add(player);
        info!(game = %self.id, player = %id, %name, "player joined");

        let check_in = Notification::CheckIn {
            name,
            is_host,
            round: self.round,
            config: self.config,
            players: self.players.standings(),
            right_walls: self.board.right_walls(),
            bottom_walls: self.board.bottom_walls(),
            goals: self.board.goals().to_vec(),
            robots: self.board.positions().to_placements(),
        };
        self.effects.push(Effect::SendTo(id, check_in));
        Ok(())
    }

    /// Apply an event from `player`.
    ///
    /// # Errors
    ///
    /// Returns why the event was refused; nothing changes in that case.
    pub fn handle_event(&mut self, player: PlayerId, event: ClientEvent) -> RoundResult {
        if self.is_ended() {
            return Err(Rejection::GameOver);
        }
        match event {
            ClientEvent::Start => self.start(player),
            ClientEvent::Bid { moves } => self.bid(player, moves),
            ClientEvent::Move { robot, direction } => self.move_robot(player, robot, direction),
            ClientEvent::Chat { msg } => self.chat(player, msg),
            ClientEvent::Configure { config } => self.configure(player, config),
            ClientEvent::Leave => self.leave(player),
        }
    }

    /// Handle expiry of the timer identified by `token`.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::StaleTimer`] if the timer was replaced or
    /// cancelled since it was armed.
    pub fn on_timer(&mut self, token: TimerToken) -> RoundResult {
        let kind = match self.timer.live() {
            Some((live, kind)) if live == token => kind,
            _ => return Err(Rejection::StaleTimer(token)),
        };
        let expected = match kind {
            TimerKind::PreBid | TimerKind::PostBid => Phase::Bidding,
            TimerKind::Demo => Phase::Demonstrating,
        };
        if self.phase != expected {
            return Err(Rejection::WrongPhase(self.phase));
        }
        self.timer.fire(token);

        match kind {
            TimerKind::PreBid | TimerKind::PostBid => self.begin_demonstrations(),
            TimerKind::Demo => {
                if let Some(bid) = self.bid {
                    self.award(bid.player, -1);
                }
                self.demo_failed();
            }
        }
        Ok(())
    }

    fn start(&mut self, player: PlayerId) -> RoundResult {
        if self.phase != Phase::Join {
            return Err(Rejection::WrongPhase(self.phase));
        }
        if !self.players.contains(player) {
            return Err(Rejection::UnknownPlayer(player));
        }
        if player != self.host {
            return Err(Rejection::NotHost(player));
        }

        info!(game = %self.id, players = self.players.len(), "game started");
        self.broadcast(Notification::Started);
        self.round = 0;
        self.advance_round();
        Ok(())
    }

    fn configure(&mut self, player: PlayerId, config: GameConfig) -> RoundResult {
        if self.phase != Phase::Join {
            return Err(Rejection::WrongPhase(self.phase));
        }
        if !self.players.contains(player) {
            return Err(Rejection::UnknownPlayer(player));
        }
        if player != self.host {
            return Err(Rejection::NotHost(player));
        }
        config.validate().map_err(Rejection::InvalidConfig)?;

        self.config = config;
        self.broadcast(Notification::ConfigUpdated { config });
        Ok(())
    }

    fn chat(&mut self, player: PlayerId, msg: String) -> RoundResult {
        let name = self
            .players
            .get(player)
            .ok_or(Rejection::UnknownPlayer(player))?
            .name
            .clone();
        let len = msg.chars().count();
        if len == 0 || len >= MAX_CHAT_LEN {
            return Err(Rejection::InvalidChat);
        }

        self.broadcast(Notification::Chat { player, name, msg });
        Ok(())
    }

    fn bid(&mut self, player: PlayerId, moves: u32) -> RoundResult {
        if self.phase != Phase::Bidding {
            return Err(Rejection::WrongPhase(self.phase));
        }
        if !self.players.contains(player) {
            return Err(Rejection::UnknownPlayer(player));
        }
        if moves < MIN_BID_MOVES {
            return Err(Rejection::BidTooLow { moves });
        }

        let bid = Bid {
            player,
            moves,
            timestamp: self.elapsed_ms(),
        };
        let placement = self
            .bids
            .push(bid)
            .ok_or(Rejection::DuplicateBid { moves })?;

        self.broadcast(Notification::BidAccepted {
            player,
            name: self.players.name_of(player).to_string(),
            moves,
            leading: placement == BidPlacement::Leading,
        });

        if matches!(self.timer.live(), Some((_, TimerKind::PreBid))) {
            self.arm_timer(TimerKind::PostBid, self.config.post_bid_timeout);
        }
        Ok(())
    }

    fn move_robot(&mut self, player: PlayerId, robot: RobotColor, direction: Direction) -> RoundResult {
        if self.phase != Phase::Demonstrating {
            return Err(Rejection::WrongPhase(self.phase));
        }
        let mut bid = match self.bid {
            Some(bid) if bid.player == player => bid,
            _ => return Err(Rejection::NotDemonstrator(player)),
        };

        let from = self.board.position(robot);
        let to = self
            .board
            .move_robot(robot, direction)
            .ok_or(Rejection::NoMovement { robot, direction })?;
        self.broadcast(Notification::RobotMoved {
            color: robot,
            from,
            to,
        });

        bid.moves = bid.moves.saturating_sub(1);
        self.bid = Some(bid);
        if bid.moves > 0 {
            return Ok(());
        }

        self.cancel_timer();
        let solved = self.goal.is_some_and(|goal| self.board.is_solved(&goal));
        if solved {
            self.award(player, 1);
            self.advance_round();
        } else {
            self.award(player, -1);
            self.demo_failed();
        }
        Ok(())
    }

    fn leave(&mut self, player: PlayerId) -> RoundResult {
        let removed = self
            .players
            .remove(player)
            .ok_or(Rejection::UnknownPlayer(player))?;
        self.bids.remove_player(player);

        info!(game = %self.id, %player, name = %removed.name, "player left");
        self.broadcast(Notification::PlayerLeft {
            player,
            name: removed.name,
        });
        self.effects.push(Effect::PlayerRemoved(player));

        if self.players.is_empty() {
            self.end_game();
        } else if self.phase == Phase::Demonstrating
            && self.bid.is_some_and(|bid| bid.player == player)
        {
            self.cancel_timer();
            self.demo_failed();
        }
        Ok(())
    }

    /// Start the next round, or end the game when rounds or goals run out.
    fn advance_round(&mut self) {
        if self.round >= self.config.num_rounds || self.goals.is_empty() {
            self.end_game();
            return;
        }
        let Some(goal) = self.goals.draw() else {
            self.end_game();
            return;
        };

        self.broadcast(Notification::RobotPositions {
            robots: self.board.positions().to_placements(),
        });
        self.board.save_robot_positions();
        self.bids.clear();
        self.bid = None;
        self.round += 1;
        self.goal = Some(goal);
        self.phase = Phase::Bidding;

        info!(game = %self.id, round = self.round, %goal, "round started");
        self.broadcast(Notification::RoundStarted {
            round: self.round,
            goal,
        });
        self.arm_timer(TimerKind::PreBid, self.config.pre_bid_timeout);
    }

    /// Bidding closed: hand the board to the best bidder.
    fn begin_demonstrations(&mut self) {
        self.reset_robots();
        self.next_demonstrator();
    }

    /// The current demonstration failed: give the next bidder a go.
    fn demo_failed(&mut self) {
        self.bid = None;
        self.reset_robots();
        self.next_demonstrator();
    }

    fn next_demonstrator(&mut self) {
        let Some(bid) = self.bids.pop_best() else {
            self.broadcast(Notification::NoPointsAwarded { round: self.round });
            self.advance_round();
            return;
        };

        self.phase = Phase::Demonstrating;
        self.bid = Some(bid);
        self.broadcast(Notification::DemonstratorAssigned {
            player: bid.player,
            name: self.players.name_of(bid.player).to_string(),
            moves: bid.moves,
        });
        self.effects.push(Effect::SendTo(
            bid.player,
            Notification::YourTurn { moves: bid.moves },
        ));
        self.arm_timer(TimerKind::Demo, self.config.demo_timeout);
    }

    fn reset_robots(&mut self) {
        let before = self.board.reset_robot_positions();
        for color in RobotColor::ALL {
            let from = before.get(color);
            let to = self.board.position(color);
            if from != to {
                self.broadcast(Notification::RobotMoved { color, from, to });
            }
        }
    }

    fn award(&mut self, player: PlayerId, delta: i32) {
        let Some(score) = self.players.adjust_score(player, delta) else {
            return;
        };
        self.broadcast(Notification::ScoreChanged {
            player,
            name: self.players.name_of(player).to_string(),
            delta,
            score,
        });
    }

    fn end_game(&mut self) {
        if self.is_ended() {
            return;
        }
        self.phase = Phase::Ended;
        self.cancel_timer();
        self.bids.clear();
        self.bid = None;

        let winners: Vec<_> = self.players.winners().into_iter().map(Player::standing).collect();
        info!(game = %self.id, rounds = self.round, winners = winners.len(), "game ended");
        self.broadcast(Notification::GameEnded { winners });
        self.effects.push(Effect::GameEnded);
    }

    fn arm_timer(&mut self, kind: TimerKind, duration: Duration) {
        let token = self.timer.arm(kind);
        self.effects.push(Effect::ArmTimer { token, duration });
        self.broadcast(Notification::Timer {
            seconds: duration.as_secs(),
        });
    }

    fn cancel_timer(&mut self) {
        if self.timer.cancel() {
            self.effects.push(Effect::CancelTimer);
        }
    }

    fn broadcast(&mut self, message: Notification) {
        self.effects.push(Effect::Broadcast(message));
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.created.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, GoalColor, GoalShape, Layout};

    const HOST: PlayerId = PlayerId(1);
    const GUEST: PlayerId = PlayerId(2);

    fn goal() -> Goal {
        Goal::new(GoalColor::Red, GoalShape::Star, Coord::new(5, 0))
    }

    /// Red at (5, 5) can reach the goal at (5, 0) in one move up.
    fn controller(num_rounds: u32) -> RoundController {
        let layout = Layout::open().with_goal(goal());
        let board = Board::with_robots(
            &layout,
            [
                Coord::new(5, 5),
                Coord::new(0, 15),
                Coord::new(2, 15),
                Coord::new(4, 15),
                Coord::new(6, 15),
            ],
        )
        .unwrap();
        let goals = GoalSequence::in_order(&[goal(), goal()]);
        let config = GameConfig {
            num_rounds,
            ..GameConfig::default()
        };
        let mut c = RoundController::new(GameId(7), HOST, config, board, goals);
        c.add_player(HOST, "host").unwrap();
        c.add_player(GUEST, "guest").unwrap();
        c.drain_effects();
        c
    }

    #[test]
    fn test_join_sends_check_in_to_joiner_only() {
        let layout = Layout::center_block();
        let board = Board::with_robots(
            &layout,
            [
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(3, 0),
                Coord::new(4, 0),
            ],
        )
        .unwrap();
        let mut c = RoundController::new(GameId(1), HOST, GameConfig::default(), board, GoalSequence::default());
        c.add_player(HOST, "host").unwrap();

        let effects = c.drain_effects();
        assert!(matches!(
            &effects[0],
            Effect::Broadcast(Notification::PlayerJoined { player, .. }) if *player == HOST
        ));
        match &effects[1] {
            Effect::SendTo(to, Notification::CheckIn { is_host, players, right_walls, robots, .. }) => {
                assert_eq!(*to, HOST);
                assert!(*is_host);
                assert_eq!(players.len(), 1);
                assert_eq!(right_walls.len(), 4);
                assert_eq!(robots.len(), 5);
            }
            other => panic!("unexpected effect {other:?}"),
        }

        assert_eq!(c.add_player(HOST, "again"), Err(Rejection::AlreadyJoined(HOST)));
    }

    #[test]
    fn test_only_host_starts() {
        let mut c = controller(3);
        assert_eq!(c.handle_event(GUEST, ClientEvent::Start), Err(Rejection::NotHost(GUEST)));
        assert!(c.drain_effects().is_empty());
        assert_eq!(c.phase(), Phase::Join);

        c.handle_event(HOST, ClientEvent::Start).unwrap();
        assert_eq!(c.phase(), Phase::Bidding);
        assert_eq!(c.round(), 1);
        assert_eq!(c.live_timer().map(|(_, k)| k), Some(TimerKind::PreBid));
        assert_eq!(
            c.handle_event(HOST, ClientEvent::Start),
            Err(Rejection::WrongPhase(Phase::Bidding))
        );
    }

    #[test]
    fn test_first_bid_switches_to_post_bid_timer() {
        let mut c = controller(3);
        c.handle_event(HOST, ClientEvent::Start).unwrap();
        let (pre, _) = c.live_timer().unwrap();

        c.handle_event(GUEST, ClientEvent::Bid { moves: 4 }).unwrap();
        let (post, kind) = c.live_timer().unwrap();
        assert_eq!(kind, TimerKind::PostBid);
        assert_ne!(pre, post);
        assert_eq!(c.on_timer(pre), Err(Rejection::StaleTimer(pre)));

        // A second bid keeps the post-bid timer running.
        c.handle_event(HOST, ClientEvent::Bid { moves: 3 }).unwrap();
        assert_eq!(c.live_timer().map(|(t, _)| t), Some(post));
    }

    #[test]
    fn test_invalid_bids_have_no_effects() {
        let mut c = controller(3);
        assert_eq!(
            c.handle_event(GUEST, ClientEvent::Bid { moves: 4 }),
            Err(Rejection::WrongPhase(Phase::Join))
        );
        c.handle_event(HOST, ClientEvent::Start).unwrap();
        c.drain_effects();

        assert_eq!(
            c.handle_event(GUEST, ClientEvent::Bid { moves: 1 }),
            Err(Rejection::BidTooLow { moves: 1 })
        );
        assert_eq!(
            c.handle_event(PlayerId(99), ClientEvent::Bid { moves: 4 }),
            Err(Rejection::UnknownPlayer(PlayerId(99)))
        );
        c.handle_event(GUEST, ClientEvent::Bid { moves: 4 }).unwrap();
        c.drain_effects();
        assert_eq!(
            c.handle_event(GUEST, ClientEvent::Bid { moves: 4 }),
            Err(Rejection::DuplicateBid { moves: 4 })
        );
        assert!(c.drain_effects().is_empty());
        assert_eq!(c.bids().len(), 1);
    }

    #[test]
    fn test_no_bids_awards_nothing_and_advances() {
        let mut c = controller(3);
        c.handle_event(HOST, ClientEvent::Start).unwrap();
        let (token, _) = c.live_timer().unwrap();
        c.drain_effects();

        c.on_timer(token).unwrap();
        let effects = c.drain_effects();
        assert!(effects.contains(&Effect::Broadcast(Notification::NoPointsAwarded { round: 1 })));
        assert_eq!(c.round(), 2);
        assert_eq!(c.phase(), Phase::Bidding);
    }

    #[test]
    fn test_move_rejections() {
        let mut c = controller(3);
        c.handle_event(HOST, ClientEvent::Start).unwrap();
        let up = ClientEvent::Move {
            robot: RobotColor::Red,
            direction: Direction::Up,
        };
        assert_eq!(
            c.handle_event(GUEST, up.clone()),
            Err(Rejection::WrongPhase(Phase::Bidding))
        );

        c.handle_event(GUEST, ClientEvent::Bid { moves: 2 }).unwrap();
        let (token, _) = c.live_timer().unwrap();
        c.on_timer(token).unwrap();
        assert_eq!(c.phase(), Phase::Demonstrating);

        assert_eq!(c.handle_event(HOST, up), Err(Rejection::NotDemonstrator(HOST)));
        // Blue sits on the bottom edge already.
        assert_eq!(
            c.handle_event(
                GUEST,
                ClientEvent::Move {
                    robot: RobotColor::Blue,
                    direction: Direction::Down
                }
            ),
            Err(Rejection::NoMovement {
                robot: RobotColor::Blue,
                direction: Direction::Down
            })
        );
        assert_eq!(c.current_bid().map(|b| b.moves), Some(2));
    }

    #[test]
    fn test_chat_rules() {
        let mut c = controller(3);
        c.handle_event(GUEST, ClientEvent::Chat { msg: "hi".into() }).unwrap();
        assert_eq!(
            c.drain_effects(),
            vec![Effect::Broadcast(Notification::Chat {
                player: GUEST,
                name: "guest".into(),
                msg: "hi".into()
            })]
        );
        assert_eq!(
            c.handle_event(GUEST, ClientEvent::Chat { msg: String::new() }),
            Err(Rejection::InvalidChat)
        );
        assert_eq!(
            c.handle_event(GUEST, ClientEvent::Chat { msg: "x".repeat(50) }),
            Err(Rejection::InvalidChat)
        );
        assert_eq!(
            c.handle_event(PlayerId(42), ClientEvent::Chat { msg: "hey".into() }),
            Err(Rejection::UnknownPlayer(PlayerId(42)))
        );
    }

    #[test]
    fn test_configure_host_only_in_join() {
        let mut c = controller(3);
        let config = GameConfig {
            num_rounds: 1,
            ..GameConfig::default()
        };
        assert_eq!(
            c.handle_event(GUEST, ClientEvent::Configure { config }),
            Err(Rejection::NotHost(GUEST))
        );
        let bad = GameConfig {
            num_rounds: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            c.handle_event(HOST, ClientEvent::Configure { config: bad }),
            Err(Rejection::InvalidConfig(_))
        ));

        c.handle_event(HOST, ClientEvent::Configure { config }).unwrap();
        assert_eq!(c.config().num_rounds, 1);
        assert_eq!(
            c.drain_effects(),
            vec![Effect::Broadcast(Notification::ConfigUpdated { config })]
        );

        c.handle_event(HOST, ClientEvent::Start).unwrap();
        assert_eq!(
            c.handle_event(HOST, ClientEvent::Configure { config }),
            Err(Rejection::WrongPhase(Phase::Bidding))
        );
    }

    #[test]
    fn test_last_player_leaving_ends_game() {
        let mut c = controller(3);
        c.handle_event(HOST, ClientEvent::Leave).unwrap();
        assert_eq!(c.phase(), Phase::Join);
        c.handle_event(GUEST, ClientEvent::Leave).unwrap();
        assert!(c.is_ended());

        let effects = c.drain_effects();
        assert!(effects.contains(&Effect::PlayerRemoved(GUEST)));
        assert!(effects.contains(&Effect::Broadcast(Notification::GameEnded { winners: vec![] })));
        assert_eq!(effects.last(), Some(&Effect::GameEnded));
        assert_eq!(c.handle_event(GUEST, ClientEvent::Start), Err(Rejection::GameOver));
    }
}

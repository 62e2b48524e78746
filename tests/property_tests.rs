//! Property-based tests for ingestion, snapshots and referee rules.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{DateTime, Utc};
use matchstate::core::{TeamColor, MAX_ROBOTS};
use matchstate::geom::{Angle, Vec2};
use matchstate::referee::{
    rules, Command, GameState, Instruction, Legality, MatchType, Provenance, RefereeState, Stage, TeamInfo,
};
use matchstate::time::{Duration, TimePoint};
use matchstate::vision::{RawWorldState, Sourced};
use matchstate::wire::vision::{DetectionBall, DetectionFrame, DetectionRobot};
use matchstate::wire::{self, WireError};
use matchstate::world::{SeenState, Team, WorldState};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_ball()(confidence in 0.0f32..1.0, x in -6000.0f32..6000.0, y in -4500.0f32..4500.0) -> DetectionBall {
        DetectionBall { confidence, x, y, ..Default::default() }
    }
}

prop_compose! {
    fn arbitrary_robot()(id in 0u32..16, x in -6000.0f32..6000.0, y in -4500.0f32..4500.0, orientation in -3.0f32..3.0) -> DetectionRobot {
        DetectionRobot {
            confidence: 0.8,
            robot_id: Some(id),
            x,
            y,
            orientation: Some(orientation),
            ..Default::default()
        }
    }
}

prop_compose! {
    fn arbitrary_detection()(
        camera_id in 0u32..8,
        frame_number in any::<u32>(),
        t_capture in 0.0f64..1000.0,
        balls in prop::collection::vec(arbitrary_ball(), 0..4),
        robots_yellow in prop::collection::vec(arbitrary_robot(), 0..6),
        robots_blue in prop::collection::vec(arbitrary_robot(), 0..6),
    ) -> DetectionFrame {
        DetectionFrame {
            camera_id,
            frame_number,
            t_capture,
            t_sent: t_capture + 0.01,
            balls,
            robots_yellow,
            robots_blue,
            ..Default::default()
        }
    }
}

fn arbitrary_color() -> impl Strategy<Value = TeamColor> {
    prop_oneof![Just(TeamColor::Yellow), Just(TeamColor::Blue)]
}

fn arbitrary_game_state() -> impl Strategy<Value = GameState> {
    prop::sample::select(GameState::ALL.to_vec())
}

fn arbitrary_instruction() -> impl Strategy<Value = Instruction> {
    prop::sample::select(Instruction::ALL.to_vec())
}

prop_compose! {
    fn arbitrary_command()(
        id in any::<u32>(),
        time in any::<i64>(),
        instruction in arbitrary_instruction(),
        ready in any::<bool>(),
        color in prop::option::of(arbitrary_color()),
    ) -> Command {
        // A lone ready flag reads back as the Ready instruction.
        let ready = ready && !matches!(instruction, Instruction::None | Instruction::Ready);
        Command::new(id, TimePoint::from_micros(time), instruction, color).with_ready(ready)
    }
}

prop_compose! {
    fn arbitrary_team_info()(
        name in "[A-Za-z ]{0,12}",
        score in 0u32..20,
        red_cards in 0u32..3,
        yellow_card_times in prop::collection::vec(0i64..120_000_000, 0..3),
        timeouts in 0u32..5,
        timeout_time in 0i64..300_000_000,
        goalkeeper in 0u32..16,
        max_allowed_bots in prop::option::of(0u32..12),
        can_place_ball in any::<bool>(),
    ) -> TeamInfo {
        TeamInfo {
            name,
            score,
            red_cards,
            yellow_cards: yellow_card_times.len() as u32,
            yellow_card_times: yellow_card_times.into_iter().map(Duration::from_micros).collect(),
            timeouts,
            timeout_time: Duration::from_micros(timeout_time),
            goalkeeper,
            max_allowed_bots,
            can_place_ball,
        }
    }
}

prop_compose! {
    fn arbitrary_provenance()(
        received in 0i64..4_000_000_000_000_000,
        lag in 0i64..1_000_000,
        source_id in "[a-z0-9-]{0,10}",
    ) -> Provenance {
        let at = |micros| DateTime::<Utc>::from_timestamp_micros(micros).unwrap_or_default();
        Provenance {
            received_at: at(received),
            sent_at: at(received - lag),
            source_id,
        }
    }
}

prop_compose! {
    fn arbitrary_referee()(
        state in arbitrary_game_state(),
        color in arbitrary_color(),
        ready in any::<bool>(),
        time in any::<i64>(),
        left in 0i64..600_000_000,
        designated in (-6000.0f32..6000.0, -4500.0f32..4500.0),
        match_type in prop::sample::select(MatchType::ALL.to_vec()),
        stage in prop::sample::select(Stage::ALL.to_vec()),
        last_command in arbitrary_command(),
        blue_info in arbitrary_team_info(),
        yellow_info in arbitrary_team_info(),
        provenance in arbitrary_provenance(),
    ) -> RefereeState {
        RefereeState {
            time: TimePoint::from_micros(time),
            match_type,
            stage,
            stage_time_left: Duration::from_micros(left),
            state,
            ready,
            color,
            last_command,
            designated_position: Vec2::new(designated.0, designated.1),
            blue_info,
            yellow_info,
            provenance,
        }
    }
}

proptest! {
    #[test]
    fn ingestion_grows_by_exactly_the_message(detections in prop::collection::vec(arbitrary_detection(), 1..12)) {
        let mut raw = RawWorldState::default();

        for detection in &detections {
            let frames = raw.ledger().len();
            let balls = raw.ball_count();
            let yellow = raw.robot_count(TeamColor::Yellow);
            let blue = raw.robot_count(TeamColor::Blue);

            let idx = raw.ingest(detection);

            prop_assert_eq!(idx.get(), frames);
            prop_assert_eq!(raw.ledger().len(), frames + 1);
            prop_assert_eq!(raw.ball_count(), balls + detection.balls.len());
            prop_assert_eq!(raw.robot_count(TeamColor::Yellow), yellow + detection.robots_yellow.len());
            prop_assert_eq!(raw.robot_count(TeamColor::Blue), blue + detection.robots_blue.len());
            prop_assert!(raw.balls().skip(balls).all(|b| b.frame_idx() == idx));
        }
    }

    #[test]
    fn every_observation_resolves_to_its_frame(detections in prop::collection::vec(arbitrary_detection(), 1..12)) {
        let mut raw = RawWorldState::default();
        for detection in &detections {
            raw.ingest(detection);
        }

        for ball in raw.balls() {
            let idx = ball.frame_idx().get();
            prop_assert!(idx < raw.ledger().len());
            prop_assert_eq!(ball.source_frame().camera_id, detections[idx].camera_id);
            prop_assert_eq!(ball.source_frame().frame_number, detections[idx].frame_number);
        }
        for robot in raw.yellow_robots().chain(raw.blue_robots()) {
            let idx = robot.frame_idx().get();
            prop_assert_eq!(robot.source_frame().frame_number, detections[idx].frame_number);
        }
    }

    #[test]
    fn retention_keeps_recent_frames_intact(
        detections in prop::collection::vec(arbitrary_detection(), 1..12),
        cutoff in 0.0f64..1000.0,
    ) {
        let mut raw = RawWorldState::default();
        for detection in &detections {
            raw.ingest(detection);
        }
        let cutoff = TimePoint::from_seconds(cutoff);

        let retained = raw.retain_since(cutoff);

        let kept: Vec<&DetectionFrame> = detections
            .iter()
            .filter(|d| TimePoint::from_seconds(d.t_capture) >= cutoff)
            .collect();
        prop_assert_eq!(retained.ledger().len(), kept.len());
        prop_assert_eq!(retained.ball_count(), kept.iter().map(|d| d.balls.len()).sum::<usize>());
        prop_assert!(retained.ledger().frames().iter().all(|f| f.t_capture >= cutoff));
        for ball in retained.balls() {
            prop_assert!(ball.source_frame().t_capture >= cutoff);
        }
        prop_assert_eq!(raw.ledger().len(), detections.len());
    }

    #[test]
    fn raw_world_survives_the_wire(detections in prop::collection::vec(arbitrary_detection(), 0..6)) {
        let mut raw = RawWorldState::default();
        for detection in &detections {
            raw.ingest(detection);
        }

        let bytes = wire::encode(&raw).unwrap();
        let decoded: RawWorldState = wire::decode(&bytes).unwrap();
        prop_assert_eq!(decoded, raw);
    }

    #[test]
    fn world_survives_the_wire(
        color in arbitrary_color(),
        id in 0u32..16,
        x in -6000.0f32..6000.0,
        y in -4500.0f32..4500.0,
        angle in -3.0f32..3.0,
    ) {
        let mut world = WorldState::new(color);
        if let Some(robot) = world.robot_mut(Team::Own, id) {
            robot.position = Vec2::new(x, y);
            robot.angle = Angle::from_rad(angle);
            robot.seen_state = SeenState::Seen;
            robot.out_for_substitute = false;
        }
        world.ball.position = Vec2::new(y, x);

        let bytes = wire::encode(&world).unwrap();
        let decoded: WorldState = wire::decode(&bytes).unwrap();
        prop_assert_eq!(&decoded, &world);

        for team in [Team::Own, Team::Opp] {
            prop_assert_eq!(decoded.robots(team).len(), MAX_ROBOTS);
            for (i, robot) in decoded.robots(team).iter().enumerate() {
                prop_assert_eq!(robot.id() as usize, i);
            }
        }
    }

    #[test]
    fn referee_survives_the_wire(state in arbitrary_referee()) {
        let bytes = wire::encode(&state).unwrap();
        let decoded: RefereeState = wire::decode(&bytes).unwrap();
        prop_assert_eq!(decoded, state);
    }

    #[test]
    fn command_flags_survive_json(command in arbitrary_command()) {
        let json = serde_json::to_string(&command).unwrap();
        let decoded: Command = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, command);
    }

    #[test]
    fn payload_kinds_are_not_interchangeable(state in arbitrary_referee()) {
        let bytes = wire::encode(&state).unwrap();
        let result = wire::decode::<WorldState>(&bytes);
        let is_kind_mismatch = matches!(result, Err(WireError::KindMismatch { .. }));
        prop_assert!(is_kind_mismatch);
    }

    #[test]
    fn halt_dominates(color in arbitrary_color(), our in arbitrary_color(), ready in any::<bool>()) {
        let state = RefereeState { state: GameState::Halt, color, ready, ..Default::default() };
        prop_assert!(!rules::can_move(&state));
        prop_assert!(!rules::can_kick_ball(&state, our));
    }

    #[test]
    fn contact_implies_proximity(state in arbitrary_referee(), our in arbitrary_color()) {
        let legality = Legality::evaluate(&state, our);
        if legality.can_kick_ball {
            prop_assert!(legality.allowed_near_ball);
            prop_assert!(legality.can_move);
        }
    }

    #[test]
    fn restart_contact_needs_ours_and_ready(state in arbitrary_referee(), our in arbitrary_color()) {
        prop_assume!(state.state.is_restart());
        let expected = state.color == our && state.ready;
        prop_assert_eq!(rules::can_kick_ball(&state, our), expected);
    }

    #[test]
    fn only_running_lets_both_teams_kick(state in arbitrary_referee()) {
        let both = rules::can_kick_ball(&state, TeamColor::Yellow) && rules::can_kick_ball(&state, TeamColor::Blue);
        prop_assert_eq!(both, state.state == GameState::Running);
    }
}

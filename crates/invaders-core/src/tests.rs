#[cfg(test)]
mod tests {
    use glam::{IVec2, Vec2};

    use crate::config::{ConfigError, CoreConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::input::{InputEvent, Key};
    use crate::render::{DrawCall, RecordingCanvas, RenderContext, TextureId};
    use crate::types::{top_left_point, Rect, Viewport};

    // ---- Geometry ----

    #[test]
    fn test_overlap_bullet_inside_alien() {
        let bullet = Rect::new(100, 100, 4, 10);
        let alien = Rect::new(98, 95, 20, 20);
        assert!(bullet.overlaps(&alien));
        assert!(alien.overlaps(&bullet));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!TOUCHING_EDGES_OVERLAP);

        let a = Rect::new(0, 0, 10, 10);
        let right_neighbour = Rect::new(10, 0, 10, 10);
        let below_neighbour = Rect::new(0, 10, 10, 10);
        let corner = Rect::new(10, 10, 10, 10);
        assert!(!a.overlaps(&right_neighbour));
        assert!(!a.overlaps(&below_neighbour));
        assert!(!a.overlaps(&corner));

        // One pixel of shared area is enough.
        let shifted = Rect::new(9, 9, 10, 10);
        assert!(a.overlaps(&shifted));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let rects = [
            Rect::new(0, 0, 10, 10),
            Rect::new(5, 5, 2, 2),
            Rect::new(-4, 3, 6, 20),
            Rect::new(10, 0, 1, 1),
            Rect::new(30, 30, 5, 5),
            Rect::new(0, 0, 0, 0),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(a.overlaps(b), b.overlaps(a), "asymmetric for {a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn test_disjoint_rects_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(50, 50, 10, 10);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_top_left_point_centers_box() {
        let p = top_left_point(Vec2::new(205.0, 200.0), 16, 16);
        assert_eq!(p, IVec2::new(197, 192));
    }

    #[test]
    fn test_top_left_point_rounds_half_away_from_zero() {
        // 10.5 - 2 = 8.5 -> 9; -0.5 - 0 = -0.5 -> -1
        assert_eq!(top_left_point(Vec2::new(10.5, 0.0), 4, 0), IVec2::new(9, 0));
        assert_eq!(top_left_point(Vec2::new(-0.5, 1.0), 0, 2), IVec2::new(-1, 0));
    }

    #[test]
    fn test_rect_centered_on() {
        let rect = Rect::centered_on(Vec2::new(640.0, 700.0), TANK_SIZE.0, TANK_SIZE.1);
        assert_eq!(rect, Rect::new(620, 688, 40, 24));
        assert_eq!(rect.right(), 660);
        assert_eq!(rect.bottom(), 712);
    }

    #[test]
    fn test_viewport_outside() {
        let viewport = Viewport::new(100, 100);
        assert!(viewport.is_outside(&Rect::new(0, -10, 4, 10)));
        assert!(!viewport.is_outside(&Rect::new(0, -9, 4, 10)));
        assert!(viewport.is_outside(&Rect::new(100, 50, 4, 4)));
        assert!(!viewport.is_outside(&Rect::new(10, 10, 4, 4)));
        assert_eq!(viewport.bounds(), Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn test_direction_sign_and_reverse() {
        assert_eq!(HorizontalDirection::Left.sign(), -1.0);
        assert_eq!(HorizontalDirection::Still.sign(), 0.0);
        assert_eq!(HorizontalDirection::Right.reversed(), HorizontalDirection::Left);
        assert_eq!(HorizontalDirection::Still.reversed(), HorizontalDirection::Still);
    }

    #[test]
    fn test_entity_kind_ordinals_follow_all() {
        for (i, kind) in EntityKind::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal(), i);
        }
    }

    // ---- Serde ----

    #[test]
    fn test_wave_outcome_serde() {
        let variants = vec![
            WaveOutcome::InProgress,
            WaveOutcome::Cleared,
            WaveOutcome::PlayerHit,
            WaveOutcome::Overrun,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WaveOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_input_event_serde() {
        let events = vec![
            InputEvent::KeyDown(Key::Left),
            InputEvent::KeyUp(Key::Right),
            InputEvent::KeyDown(Key::Fire),
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: InputEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
        let json = serde_json::to_string(&InputEvent::KeyDown(Key::Fire)).unwrap();
        assert_eq!(json, r#"{"type":"KeyDown","key":"Fire"}"#);
    }

    #[test]
    fn test_game_event_is_tagged() {
        let event = GameEvent::WaveEnded {
            outcome: WaveOutcome::Cleared,
            tick: 12,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"WaveEnded""#), "got {json}");
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults() {
        let config = CoreConfig::default();
        assert!(!config.debug_colliders);
        assert_eq!(config.alien_count(), Some(ALIEN_ROWS * ALIEN_COLUMNS));
        assert_eq!(config.bullet_capacity, BULLET_CAPACITY);
    }

    #[test]
    fn test_config_oversized_grid_has_no_count() {
        let config = CoreConfig::from_json_str(&format!(
            r#"{{ "alien_rows": {}, "alien_columns": 2 }}"#,
            usize::MAX
        ))
        .unwrap();
        assert_eq!(config.alien_count(), None);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = CoreConfig::from_json_str(r#"{ "debug_colliders": true, "alien_rows": 2 }"#).unwrap();
        assert!(config.debug_colliders);
        assert_eq!(config.alien_rows, 2);
        assert_eq!(config.alien_columns, ALIEN_COLUMNS);
    }

    #[test]
    fn test_config_rejects_bad_json() {
        let err = CoreConfig::from_json_str("{ debug_colliders: yes").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_file_is_io_error() {
        let err = CoreConfig::load("/nonexistent/invaders.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ---- Recording canvas ----

    #[test]
    fn test_recording_canvas_records_in_order() {
        let mut canvas = RecordingCanvas::new(Viewport::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let tex = canvas.load_texture(EntityKind::Tank).unwrap();
        canvas.clear();
        canvas.draw_texture(tex, Rect::new(1, 2, 3, 4));
        canvas.draw_outline(Rect::new(1, 2, 3, 4));

        assert_eq!(
            canvas.calls(),
            &[
                DrawCall::Clear,
                DrawCall::Texture {
                    texture: tex,
                    rect: Rect::new(1, 2, 3, 4)
                },
                DrawCall::Outline {
                    rect: Rect::new(1, 2, 3, 4)
                },
            ]
        );
        assert_eq!(canvas.texture_rects(), vec![Rect::new(1, 2, 3, 4)]);
        assert_eq!(canvas.take_calls().len(), 3);
        assert!(canvas.calls().is_empty());
    }

    #[test]
    fn test_recording_canvas_texture_lifecycle() {
        let mut canvas = RecordingCanvas::new(Viewport::new(100, 100)).fail_texture(EntityKind::Bullet);
        let a = canvas.load_texture(EntityKind::Alien).unwrap();
        let b = canvas.load_texture(EntityKind::Tank).unwrap();
        assert_ne!(a, b);
        assert!(canvas.load_texture(EntityKind::Bullet).is_err());
        assert_eq!(canvas.live_texture_count(), 2);

        canvas.release_texture(a);
        canvas.release_texture(TextureId(999));
        assert_eq!(canvas.live_texture_count(), 1);
    }
}

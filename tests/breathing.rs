mod tests {
    use rgb_cycler::breathing::{BreathingModulator, DEFAULT_STEP};
    use rgb_cycler::color::Rgb;

    #[test]
    fn test_climb_to_boundary_and_flip() {
        let mut breathing = BreathingModulator::new(DEFAULT_STEP);
        assert_eq!(breathing.level(), 0);
        assert!(breathing.is_rising());

        for _ in 0..50 {
            breathing.tick();
        }
        assert_eq!(breathing.level(), 250);
        assert!(breathing.is_rising());

        // 51st tick reaches the boundary exactly and flips direction
        breathing.tick();
        assert_eq!(breathing.level(), 255);
        assert!(!breathing.is_rising());

        breathing.tick();
        assert_eq!(breathing.level(), 250);
        assert!(!breathing.is_rising());
    }

    #[test]
    fn test_clamp_with_step_not_dividing_range() {
        let mut breathing = BreathingModulator::new(40);
        let mut previous = breathing.level();
        for _ in 0..1000 {
            let was_rising = breathing.is_rising();
            breathing.tick();
            let level = breathing.level();

            // level moves by at most one step per tick
            assert!(level.abs_diff(previous) <= 40);
            // direction only flips at a boundary
            if breathing.is_rising() != was_rising {
                assert!(level == 0 || level == 255);
            }
            previous = level;
        }
    }

    #[test]
    fn test_zero_channel_stays_off_for_every_level() {
        let mut breathing = BreathingModulator::new(1);
        for _ in 0..=255 {
            assert_eq!(breathing.apply(0), 0);
            breathing.tick();
        }
    }

    #[test]
    fn test_apply_truncates_integer_scaling() {
        let mut breathing = BreathingModulator::new(128);
        breathing.tick();
        assert_eq!(breathing.level(), 128);

        assert_eq!(breathing.apply(255), 128);
        assert_eq!(breathing.apply(128), 64);
        assert_eq!(breathing.apply(1), 0);

        let color = breathing.apply_color(Rgb {
            r: 0,
            g: 255,
            b: 255,
        });
        assert_eq!(
            color,
            Rgb {
                r: 0,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_full_level_passes_colors_through() {
        let mut breathing = BreathingModulator::new(255);
        breathing.tick();
        assert_eq!(breathing.level(), 255);
        assert_eq!(breathing.apply(17), 17);
        assert_eq!(breathing.apply(255), 255);
    }
}

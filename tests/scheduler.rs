mod tests {
    use core::cell::Cell;

    use led_charge_gauge::color::Rgb;
    use led_charge_gauge::frame_scheduler::{DEFAULT_FRAME_DURATION, FrameScheduler};
    use led_charge_gauge::{Duration, Instant, StripDriver};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    /// Counts presented frames and remembers the first pixel.
    struct RecordingDriver<'a> {
        writes: &'a Cell<usize>,
        first_px: &'a Cell<Rgb>,
    }

    impl StripDriver for RecordingDriver<'_> {
        fn write(&mut self, colors: &[Rgb]) {
            self.writes.set(self.writes.get() + 1);
            if let Some(px) = colors.first() {
                self.first_px.set(*px);
            }
        }
    }

    fn driver<'a>(writes: &'a Cell<usize>, first_px: &'a Cell<Rgb>) -> RecordingDriver<'a> {
        RecordingDriver { writes, first_px }
    }

    #[test]
    fn test_tick_renders_and_presents_once() {
        let writes = Cell::new(0);
        let first_px = Cell::new(Rgb::default());
        let mut scheduler: FrameScheduler<_, 8> =
            FrameScheduler::new(driver(&writes, &first_px));

        scheduler.tick(Instant::from_millis(0), |leds| {
            leds[0] = RED;
        });

        assert_eq!(writes.get(), 1);
        assert_eq!(first_px.get(), RED);
        assert_eq!(scheduler.frame()[0], RED);
    }

    #[test]
    fn test_sleep_duration_tracks_frame_budget() {
        let writes = Cell::new(0);
        let first_px = Cell::new(Rgb::default());
        let mut scheduler: FrameScheduler<_, 8> = FrameScheduler::with_frame_duration(
            driver(&writes, &first_px),
            Duration::from_millis(20),
        );

        let first = scheduler.tick(Instant::from_millis(0), |_| {});
        assert_eq!(first.sleep_duration, Duration::from_millis(20));
        assert_eq!(first.next_deadline, Instant::from_millis(20));

        // Ticking 5 ms into the budget leaves 35 ms until the second deadline
        let second = scheduler.tick(Instant::from_millis(5), |_| {});
        assert_eq!(second.next_deadline, Instant::from_millis(40));
        assert_eq!(second.sleep_duration, Duration::from_millis(35));
        assert_eq!(writes.get(), 2);
    }

    #[test]
    fn test_drift_correction_skips_backlog() {
        let writes = Cell::new(0);
        let first_px = Cell::new(Rgb::default());
        let mut scheduler: FrameScheduler<_, 8> = FrameScheduler::with_frame_duration(
            driver(&writes, &first_px),
            Duration::from_millis(20),
        );

        scheduler.tick(Instant::from_millis(0), |_| {});

        // A long stall resets the schedule instead of bursting to catch up
        let result = scheduler.tick(Instant::from_millis(1000), |_| {});
        assert_eq!(result.next_deadline, Instant::from_millis(1020));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_default_frame_duration_matches_fps() {
        assert_eq!(DEFAULT_FRAME_DURATION, Duration::from_millis(33));
    }
}

mod tests {
    use led_charge_gauge::animation::{AnimationType, Direction};
    use led_charge_gauge::animator::Animator;
    use led_charge_gauge::charge::{ChargeDisplay, DisplayStyle};
    use led_charge_gauge::color::Rgb;
    use led_charge_gauge::command::{Command, CommandQueue, apply};
    use led_charge_gauge::segment::Segment;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_queue_is_fifo() {
        let queue: CommandQueue<4> = CommandQueue::new();

        queue.try_send(Command::Start).unwrap();
        queue.try_send(Command::Stop).unwrap();

        assert!(matches!(queue.try_receive(), Some(Command::Start)));
        assert!(matches!(queue.try_receive(), Some(Command::Stop)));
        assert!(queue.try_receive().is_none());
    }

    #[test]
    fn test_queue_rejects_when_full() {
        let queue: CommandQueue<2> = CommandQueue::new();
        let sender = queue.sender();

        sender.try_send(Command::Start).unwrap();
        sender.try_send(Command::Stop).unwrap();

        let err = sender.try_send(Command::SetCharge(0.5)).unwrap_err();
        assert!(matches!(err.0, Command::SetCharge(_)));

        // Draining makes room again
        assert!(queue.try_receive().is_some());
        assert!(sender.try_send(Command::SetCharge(0.5)).is_ok());
    }

    #[test]
    fn test_apply_routes_to_consumers() {
        let mut leds = [BLACK; 16];
        let mut animator = Animator::new(Segment::contiguous(0, 0, 8, false));
        let mut gauge = ChargeDisplay::new(Segment::contiguous(1, 8, 8, false));

        let queue: CommandQueue<8> = CommandQueue::new();
        queue
            .try_send(Command::SetAnimation {
                color: GREEN,
                animation: AnimationType::Solid,
                direction: Direction::Forward,
            })
            .unwrap();
        queue.try_send(Command::Start).unwrap();
        queue.try_send(Command::SetCharge(0.30)).unwrap();
        queue
            .try_send(Command::SetStyle(DisplayStyle::Solid))
            .unwrap();

        while let Some(command) = queue.try_receive() {
            apply(command, &mut animator, &mut gauge, &mut leds);
        }

        assert!(animator.is_active());
        assert_eq!(animator.animation_type(), AnimationType::Solid);
        animator.tick(&mut leds);
        assert_eq!(leds[0], GREEN);

        // Charge 0.30 on the solid style lights 3 red pixels at slot 8
        assert_eq!(leds[8], RED);
        assert_eq!(leds[10], RED);
        assert_eq!(leds[11], BLACK);
    }

    #[test]
    fn test_apply_voltage_command() {
        let mut leds = [BLACK; 8];
        let mut animator = Animator::new(Segment::contiguous(0, 0, 4, false));
        let mut gauge = ChargeDisplay::new(Segment::contiguous(1, 4, 4, false));

        apply(
            Command::SetVoltage {
                millivolts: 4200,
                min: 3000,
                max: 4200,
            },
            &mut animator,
            &mut gauge,
            &mut leds,
        );

        assert!((gauge.charge_fraction() - 1.0).abs() < 1e-6);
        assert!(leds[4..].iter().all(|led| *led != BLACK));
    }

    #[test]
    fn test_apply_stop() {
        let mut leds = [BLACK; 4];
        let mut animator = Animator::new(Segment::contiguous(0, 0, 4, false));
        let mut gauge = ChargeDisplay::new(Segment::contiguous(1, 0, 4, false));

        animator.start();
        apply(Command::Stop, &mut animator, &mut gauge, &mut leds);
        assert!(!animator.is_active());
    }
}

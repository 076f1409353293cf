#[cfg(test)]
mod tests {
    use crate::deform_map::brush::{
        BrushEngine, BrushEngineConfig, BrushStroke, FALLOFF_CUTOFF, GaussianBrushEngine,
        ScanRegion, ScanStrategy, gaussian_falloff,
    };
    use crate::deform_map::common::error::PainterError;
    use crate::deform_map::pixel::{Channel, Color4, NormalizedColor, PixelBuffer};

    fn engine(scan: ScanStrategy, parallel: bool) -> GaussianBrushEngine {
        GaussianBrushEngine::new(
            BrushEngineConfig::builder()
                .scan(scan)
                .parallel(parallel)
                .build(),
        )
    }

    fn red_stroke(cx: i32, cy: i32) -> BrushStroke {
        BrushStroke::builder()
            .center(cx, cy)
            .sigma(1.0)
            .power(1.0)
            .clamp(0.0, 1.0)
            .clamp_channel(Channel::R)
            .color(NormalizedColor::new(1.0, 0.0, 0.0, 0.0))
            .build()
    }

    #[test]
    fn test_stroke_builder_defaults() {
        let stroke = BrushStroke::builder().center(3, -4).build();

        assert_eq!((stroke.center_x, stroke.center_y), (3, -4));
        assert_eq!(stroke.sigma, 10.0);
        assert_eq!(stroke.power, 0.05);
        assert_eq!((stroke.clamp_min, stroke.clamp_max), (0.0, 1.0));
        assert_eq!(stroke.clamp_channel, Channel::R);
    }

    #[test]
    fn test_engine_config_builder() {
        let config = BrushEngineConfig::builder()
            .scan(ScanStrategy::Full)
            .parallel(false)
            .build();

        assert_eq!(config.scan, ScanStrategy::Full);
        assert!(!config.parallel);

        let default = BrushEngineConfig::default();
        assert_eq!(default.scan, ScanStrategy::Bounded);
        assert!(default.parallel);
    }

    #[test]
    fn test_small_buffer_scenario() {
        let mut buffer = PixelBuffer::new(4, 4, Color4::BLACK).unwrap();

        engine(ScanStrategy::Full, false)
            .apply(&mut buffer, &red_stroke(2, 2))
            .unwrap();

        assert_eq!(buffer.get(2, 2).unwrap(), Color4::new(255, 0, 0, 0));
        // distance sqrt(8): exp(-4) ~= 0.0183
        let corner = buffer.get(0, 0).unwrap();
        assert_eq!(corner, Color4::new(5, 0, 0, 0));
        // distance 1: exp(-0.5) ~= 0.6065
        assert_eq!(buffer.get(1, 2).unwrap().r, 155);
    }

    #[test]
    fn test_cutoff_leaves_distant_pixels_untouched() {
        let fill = Color4::new(10, 20, 30, 40);
        let mut buffer = PixelBuffer::new(8, 8, fill).unwrap();

        engine(ScanStrategy::Full, false)
            .apply(&mut buffer, &red_stroke(2, 2))
            .unwrap();

        // distance 3: exp(-4.5) ~= 0.0111, just above the cutoff
        assert!(gaussian_falloff(3.0, 0.0, 1.0) > FALLOFF_CUTOFF);
        assert_eq!(buffer.get(5, 2).unwrap(), Color4::new(13, 20, 30, 40));

        // distance sqrt(10): exp(-5) ~= 0.0067, below the cutoff
        assert!(gaussian_falloff(3.0, 1.0, 1.0) <= FALLOFF_CUTOFF);
        assert_eq!(buffer.get(5, 3).unwrap(), fill);
        assert_eq!(buffer.get(7, 7).unwrap(), fill);
    }

    #[test]
    fn test_zero_power_is_identity() {
        let mut buffer = PixelBuffer::new(16, 16, Color4::new(1, 2, 3, 4)).unwrap();
        buffer.set(8, 8, Color4::new(200, 100, 50, 255)).unwrap();
        let before = buffer.clone();

        let stroke = BrushStroke::builder()
            .center(8, 8)
            .sigma(4.0)
            .power(0.0)
            .color(NormalizedColor::new(1.0, 1.0, 1.0, 1.0))
            .build();
        engine(ScanStrategy::Full, true)
            .apply(&mut buffer, &stroke)
            .unwrap();

        assert_eq!(buffer, before);
    }

    #[test]
    fn test_clamp_channel_stays_in_range() {
        let mut buffer = PixelBuffer::new(32, 32, Color4::new(128, 128, 128, 128)).unwrap();
        let clamp_channel = Channel::G;

        for power in [5.0, -5.0] {
            let stroke = BrushStroke::builder()
                .center(16, 16)
                .sigma(5.0)
                .power(power)
                .clamp(0.2, 0.8)
                .clamp_channel(clamp_channel)
                .color(NormalizedColor::new(1.0, 1.0, 1.0, 1.0))
                .build();
            engine(ScanStrategy::Bounded, true)
                .apply(&mut buffer, &stroke)
                .unwrap();

            for px in buffer.pixels() {
                let g = px.channel(clamp_channel);
                assert!((51..=204).contains(&g), "clamped channel out of range: {}", g);
            }
        }

        // unclamped channels saturate at the byte limits instead
        assert_eq!(buffer.get(16, 16).unwrap().r, 0);
        let mut buffer = PixelBuffer::new(32, 32, Color4::new(128, 128, 128, 128)).unwrap();
        let stroke = BrushStroke::builder()
            .center(16, 16)
            .sigma(5.0)
            .power(5.0)
            .clamp(0.2, 0.8)
            .clamp_channel(clamp_channel)
            .color(NormalizedColor::new(1.0, 1.0, 1.0, 1.0))
            .build();
        engine(ScanStrategy::Bounded, true)
            .apply(&mut buffer, &stroke)
            .unwrap();
        assert_eq!(buffer.get(16, 16).unwrap(), Color4::new(255, 204, 255, 255));
    }

    #[test]
    fn test_falloff_is_radially_symmetric() {
        let sigma = 2.5;
        let reference = gaussian_falloff(3.0, 4.0, sigma);
        for (dx, dy) in [(4.0, 3.0), (-3.0, 4.0), (3.0, -4.0), (-4.0, -3.0), (5.0, 0.0), (0.0, -5.0)] {
            assert_eq!(gaussian_falloff(dx, dy, sigma), reference);
        }

        let mut buffer = PixelBuffer::new(21, 21, Color4::BLACK).unwrap();
        let stroke = BrushStroke::builder()
            .center(10, 10)
            .sigma(sigma)
            .power(0.5)
            .color(NormalizedColor::new(1.0, 1.0, 0.0, 0.0))
            .build();
        engine(ScanStrategy::Full, true)
            .apply(&mut buffer, &stroke)
            .unwrap();

        let expected = buffer.get(13, 14).unwrap();
        assert_ne!(expected, Color4::BLACK);
        for (x, y) in [(14, 13), (7, 14), (13, 6), (6, 7), (15, 10), (10, 5)] {
            assert_eq!(buffer.get(x, y).unwrap(), expected);
        }
    }

    #[test]
    fn test_scan_strategies_agree() {
        let strokes = [
            BrushStroke::builder().center(20, 12).sigma(3.0).power(0.3).build(),
            BrushStroke::builder()
                .center(-4, 40)
                .sigma(6.0)
                .power(-0.7)
                .clamp_channel(Channel::G)
                .color(NormalizedColor::new(0.0, 1.0, 0.0, 1.0))
                .build(),
            BrushStroke::builder().center(63, 0).sigma(1.5).power(2.0).clamp(-1.0, 1.0).build(),
            BrushStroke::builder().center(500, 500).sigma(2.0).power(1.0).build(),
        ];

        let fill = Color4::new(128, 128, 0, 255);
        let mut reference = PixelBuffer::new(64, 48, fill).unwrap();
        for stroke in &strokes {
            engine(ScanStrategy::Full, false)
                .apply(&mut reference, stroke)
                .unwrap();
        }
        assert_ne!(reference, PixelBuffer::new(64, 48, fill).unwrap());

        for (scan, parallel) in [
            (ScanStrategy::Full, true),
            (ScanStrategy::Bounded, false),
            (ScanStrategy::Bounded, true),
        ] {
            let mut buffer = PixelBuffer::new(64, 48, fill).unwrap();
            for stroke in &strokes {
                engine(scan, parallel).apply(&mut buffer, stroke).unwrap();
            }
            assert_eq!(buffer, reference, "{:?} parallel={} diverged", scan, parallel);
        }
    }

    #[test]
    fn test_center_outside_buffer() {
        let mut buffer = PixelBuffer::new(8, 8, Color4::BLACK).unwrap();
        let stroke = BrushStroke::builder()
            .center(-5, -5)
            .sigma(3.0)
            .power(1.0)
            .build();

        engine(ScanStrategy::Bounded, false)
            .apply(&mut buffer, &stroke)
            .unwrap();

        assert!(buffer.get(0, 0).unwrap().r > 0);
        assert_eq!(buffer.get(7, 7).unwrap(), Color4::BLACK);
    }

    #[test]
    fn test_scan_region_clipping() {
        let buffer = PixelBuffer::new(10, 10, Color4::BLACK).unwrap();
        let bounded = engine(ScanStrategy::Bounded, false);

        let stroke = BrushStroke::builder().center(1, 8).sigma(1.0).build();
        assert_eq!(
            bounded.scan_region(&buffer, &stroke),
            Some(ScanRegion { x0: 0, x1: 6, y0: 4, y1: 10 })
        );

        let far = BrushStroke::builder().center(100, 100).sigma(1.0).build();
        assert_eq!(bounded.scan_region(&buffer, &far), None);

        assert_eq!(
            engine(ScanStrategy::Full, false).scan_region(&buffer, &far),
            Some(ScanRegion { x0: 0, x1: 10, y0: 0, y1: 10 })
        );
    }

    #[test]
    fn test_invalid_parameters_rejected_before_mutation() {
        let mut buffer = PixelBuffer::new(4, 4, Color4::BLACK).unwrap();
        let engine = engine(ScanStrategy::Full, false);

        let invalid = [
            BrushStroke::builder().center(2, 2).sigma(0.0).power(1.0).build(),
            BrushStroke::builder().center(2, 2).sigma(-1.0).power(1.0).build(),
            BrushStroke::builder().center(2, 2).sigma(f32::NAN).power(1.0).build(),
            BrushStroke::builder().center(2, 2).power(f32::INFINITY).build(),
            BrushStroke::builder().center(2, 2).power(1.0).clamp(1.0, 0.0).build(),
        ];

        for stroke in &invalid {
            let result = engine.apply(&mut buffer, stroke);
            assert!(matches!(result, Err(PainterError::InvalidParameter(_))), "{:?}", stroke);
        }
        assert_eq!(buffer, PixelBuffer::new(4, 4, Color4::BLACK).unwrap());
    }

    #[test]
    fn test_underflowing_sigma_rejected() {
        let fill = Color4::new(128, 128, 0, 255);
        let mut buffer = PixelBuffer::new(4, 4, fill).unwrap();
        let engine = engine(ScanStrategy::Full, false);
        let stroke = BrushStroke::builder()
            .center(2, 2)
            .sigma(1e-30)
            .power(0.05)
            .clamp(0.2, 0.8)
            .color(NormalizedColor::new(1.0, 0.0, 0.0, 1.0))
            .build();

        let result = engine.apply(&mut buffer, &stroke);

        assert!(matches!(result, Err(PainterError::InvalidParameter(_))));
        assert_eq!(buffer.get(2, 2).unwrap(), fill);

        // smallest sigma still accepted paints and respects the clamp
        let tiny = BrushStroke { sigma: 1e-15, ..stroke };
        engine.apply(&mut buffer, &tiny).unwrap();
        let center = buffer.get(2, 2).unwrap();
        assert!((51..=204).contains(&center.r), "{:?}", center);
        assert_eq!(center.a, 255);
    }

    #[test]
    fn test_strokes_accumulate() {
        let mut buffer = PixelBuffer::new(8, 8, Color4::BLACK).unwrap();
        let engine = engine(ScanStrategy::Bounded, true);
        let stroke = BrushStroke::builder()
            .center(4, 4)
            .sigma(2.0)
            .power(0.08)
            .color(NormalizedColor::new(1.0, 0.0, 0.0, 1.0))
            .build();

        engine.apply(&mut buffer, &stroke).unwrap();
        let once = buffer.get(4, 4).unwrap();
        engine.apply(&mut buffer, &stroke).unwrap();
        let twice = buffer.get(4, 4).unwrap();

        assert_eq!(once, Color4::new(20, 0, 0, 20));
        assert_eq!(twice, Color4::new(40, 0, 0, 40));
    }
}

use wavfx::{
    delay::{delay, echo},
    distortion::distortion,
    peak,
    pitch_shift::{frame_len, pitch_shift},
    resample::chipmunk,
    reverb::reverb,
    reverse::reverse,
    time_stretch::slow_motion,
    Effect, EffectKind, EffectParams, Error, Pcm, PitchFilter, QuantizePolicy,
};

fn voice_like(len: usize, sample_rate: u32) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            0.3 * (std::f32::consts::TAU * 220.0 * t).sin()
                + 0.1 * (std::f32::consts::TAU * 1330.0 * t).sin()
        })
        .collect()
}

#[test]
fn test_delay_and_echo_lengths() {
    for (len, delay_time, sample_rate) in [
        (44100, 0.5, 44100),
        (1000, 0.1, 8000),
        (7, 0.0, 48000),
    ] {
        let buf = voice_like(len, sample_rate);
        let expected = len + (delay_time * sample_rate as f64).floor() as usize;
        assert_eq!(delay(&buf, delay_time, sample_rate).unwrap().len(), expected);
        assert_eq!(
            echo(&buf, delay_time, 0.5, sample_rate).unwrap().len(),
            expected
        );
    }
}

#[test]
fn test_delay_half_second_at_44100() {
    let buf = vec![0.01f32; 44100];
    assert_eq!(delay(&buf, 0.5, 44100).unwrap().len(), 66150);
}

#[test]
fn test_reverb_length_and_peak() {
    let buf: Vec<f64> = voice_like(8000, 8000).into_iter().map(f64::from).collect();
    for (d, decay) in [(0, 0.5), (300, 0.5), (800, 0.9), (1, 0.0)] {
        let out = reverb(&buf, d, decay).unwrap();
        assert_eq!(out.len(), buf.len());
        assert!((peak(&out) - 0.5).abs() < 1e-12);
    }
}

#[test]
fn test_reverse_involution() {
    let samples: Vec<i16> = (0..5000)
        .map(|i| ((i * 7919) % 65536 - 32768) as i16)
        .collect();
    assert_eq!(reverse(&reverse(&samples)), samples);
    assert_eq!(
        reverse(&[100i16, -200, 300, -400]),
        vec![-400, 300, -200, 100]
    );
}

#[test]
fn test_chipmunk_length_rate_and_rejects() {
    let buf = voice_like(10007, 22050);
    for speedup in [0.3, 0.75, 1.0, 2.0, 2.5, 7.0] {
        let (out, rate) = chipmunk(&buf, 22050, speedup).unwrap();
        assert_eq!(out.len(), (buf.len() as f64 / speedup).floor() as usize);
        assert_eq!(rate, (22050.0 * speedup).round() as u32);
    }
    for speedup in [0.0, -1.0] {
        assert!(matches!(
            chipmunk(&buf, 22050, speedup),
            Err(Error::InvalidParameter(_))
        ));
    }
}

#[test]
fn test_slow_motion_keeps_rate() {
    let buf = voice_like(3000, 16000);
    let (out, rate) = slow_motion(&buf, 16000, 3.0).unwrap();
    assert_eq!(out.len(), 9000);
    assert_eq!(rate, 16000);
    // Every third output sample lands on an original one.
    for (j, &x) in out.iter().enumerate().step_by(3) {
        assert!((x - buf[j / 3]).abs() < 1e-5);
    }
}

#[test]
fn test_distortion_bounds() {
    let buf = voice_like(2000, 8000);
    for gain in [0.5, 1.5, 10.0, -3.0] {
        for fold in [0.05, 0.2, 0.5] {
            let out = distortion(&buf, gain, fold).unwrap();
            let fold = fold as f32;
            assert!(out.iter().all(|&x| (-fold..=fold).contains(&x)));
        }
    }
}

#[test]
fn test_pitch_shift_16000_samples() {
    let buf = voice_like(16000, 44100);
    for filter in [PitchFilter::Helium, PitchFilter::Robot] {
        let out = pitch_shift(&buf, 44100, filter).unwrap();
        assert_eq!(out.len(), 16000);
        let tail = 16000 % frame_len(44100);
        assert!(out[16000 - tail..].iter().all(|&x| x == 0.0));
    }
}

#[test]
fn test_dispatch_every_effect() {
    let samples: Vec<i16> = voice_like(8820, 44100)
        .into_iter()
        .map(|x| (x * 32768.0) as i16)
        .collect();
    let input = Pcm::new(44100, 2, samples);
    let params = EffectParams::default();

    for kind in EffectKind::ALL {
        let rendered = params
            .effect(kind)
            .apply(&input, QuantizePolicy::Saturate)
            .unwrap();
        let expected_len = match kind {
            EffectKind::Delay | EffectKind::Echo => 8820 + 22050,
            EffectKind::Chipmunk => 4410,
            EffectKind::SlowMotion => 17640,
            _ => 8820,
        };
        assert_eq!(rendered.pcm.samples.len(), expected_len, "{}", kind);
        assert_eq!(rendered.pcm.channels, 2);
        let expected_rate = if kind == EffectKind::Chipmunk { 88200 } else { 44100 };
        assert_eq!(rendered.pcm.sample_rate, expected_rate, "{}", kind);
    }
}

#[test]
fn test_dispatch_reports_invalid_parameters() {
    let input = Pcm::mono(44100, vec![1000; 4410]);
    assert!(matches!(
        Effect::Chipmunk { speedup: 0.0 }.apply(&input, QuantizePolicy::Saturate),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        Effect::SlowMotion { slowdown: -2.0 }.apply(&input, QuantizePolicy::Saturate),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        Effect::Reverb {
            delay: 10000,
            decay: 0.5
        }
        .apply(&input, QuantizePolicy::Saturate),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        "robot-voice".parse::<PitchFilter>(),
        Err(Error::InvalidParameter(_))
    ));
}

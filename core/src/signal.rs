//! Sample arrays computed from a frequency and a sample duration. Everything here is `f32`, and
//! non-finite inputs (e.g. an infinite sample duration from a zero sample rate) propagate into
//! the output rather than being rejected.

use std::f32::consts::PI;

fn phase(freq: f32, sample_duration: f32, i: usize) -> f32 {
    2.0 * PI * freq * sample_duration * i as f32
}

/// `signal[i] = sin(2π · freq · sample_duration · i) · π`
pub fn fill_sine(signal: &mut [f32], freq: f32, sample_duration: f32) {
    for (i, sample) in signal.iter_mut().enumerate() {
        *sample = phase(freq, sample_duration, i).sin() * PI;
    }
}

/// `signal[i] = tan(i) · cos(2π · freq · sample_duration · i) · π`
///
/// Note that the tangent is of the raw sample index rather than of time, so the output spikes
/// wherever the index lands near an odd multiple of π/2.
pub fn fill_tangent(signal: &mut [f32], freq: f32, sample_duration: f32) {
    for (i, sample) in signal.iter_mut().enumerate() {
        *sample = (i as f32).tan() * phase(freq, sample_duration, i).cos() * PI;
    }
}

pub fn sine_signal(n: usize, freq: f32, sample_duration: f32) -> Vec<f32> {
    let mut signal = vec![0.0; n];
    fill_sine(&mut signal, freq, sample_duration);
    signal
}

pub fn tangent_signal(n: usize, freq: f32, sample_duration: f32) -> Vec<f32> {
    let mut signal = vec![0.0; n];
    fill_tangent(&mut signal, freq, sample_duration);
    signal
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sine_matches_formula() {
        let signal = sine_signal(4, 0.01, 0.0001);
        let expected = [
            0.0,
            (2.0 * PI * 0.01 * 0.0001 * 1.0).sin() * PI,
            (2.0 * PI * 0.01 * 0.0001 * 2.0).sin() * PI,
            (2.0 * PI * 0.01 * 0.0001 * 3.0).sin() * PI,
        ];
        assert_eq!(signal, expected);
    }

    #[test]
    fn tangent_uses_raw_index() {
        let signal = tangent_signal(3, 0.0, 0.001);
        // With zero frequency the cosine term is 1 so only the tangent of the index remains.
        assert_eq!(signal[0], 0.0);
        assert_eq!(signal[1], 1.0f32.tan() * PI);
        assert_eq!(signal[2], 2.0f32.tan() * PI);
    }

    #[test]
    fn signals_are_deterministic() {
        let a = sine_signal(1920, 123.4, 1.0 / 4410.0);
        let b = sine_signal(1920, 123.4, 1.0 / 4410.0);
        assert_eq!(
            a.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
            b.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
        );
        let a = tangent_signal(1920, 123.4, 1.0 / 4410.0);
        let b = tangent_signal(1920, 123.4, 1.0 / 4410.0);
        assert_eq!(
            a.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
            b.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn fill_overwrites_whole_buffer() {
        let mut signal = vec![f32::NAN; 16];
        fill_sine(&mut signal, 10.0, 0.001);
        assert_eq!(signal, sine_signal(16, 10.0, 0.001));
    }

    #[test]
    fn infinite_sample_duration_propagates() {
        let signal = sine_signal(3, 1.0, f32::INFINITY);
        // 0 * inf is NaN, as is sin(inf)
        assert!(signal.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn empty() {
        assert!(sine_signal(0, 1.0, 1.0).is_empty());
        assert!(tangent_signal(0, 1.0, 1.0).is_empty());
    }
}

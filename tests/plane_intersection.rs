//! R3: the three-plane solver recovers a random common point from
//! random plane orientations, repeated 1000 times with a deterministic
//! generator.

use meteor_trajectory::plane::{intersect_three, Plane};

struct Xorshift64(u64);

impl Xorshift64 {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_signed_half(&mut self) -> f64 {
        ((self.next_u64() >> 11) as f64 / (1u64 << 53) as f64) - 0.5
    }
}

fn plane_through(a: f64, b: f64, c: f64, point: (f64, f64, f64)) -> Plane {
    let d = -(a * point.0 + b * point.1 + c * point.2);
    Plane { a, b, c, d }
}

#[test]
fn test_plane_intersection_recovers_random_common_point() {
    let mut rng = Xorshift64(0xD1B54A32D192ED03);

    for _ in 0..1000 {
        let point = (rng.next_signed_half(), rng.next_signed_half(), rng.next_signed_half());

        let p1 = plane_through(rng.next_signed_half(), rng.next_signed_half(), rng.next_signed_half(), point);
        let p2 = plane_through(rng.next_signed_half(), rng.next_signed_half(), rng.next_signed_half(), point);
        let p3 = plane_through(rng.next_signed_half(), rng.next_signed_half(), rng.next_signed_half(), point);

        match intersect_three(p1, p2, p3) {
            Ok((x, y, z)) => {
                assert!((x - point.0).abs() < 1e-6, "x mismatch: {} vs {}", x, point.0);
                assert!((y - point.1).abs() < 1e-6, "y mismatch: {} vs {}", y, point.1);
                assert!((z - point.2).abs() < 1e-6, "z mismatch: {} vs {}", z, point.2);
            }
            // Randomly drawn normals occasionally land too close to
            // coplanar to clear the singularity threshold; that is a
            // correct refusal, not a test failure.
            Err(_) => continue,
        }
    }
}

//! Mathematical constants, pre-rounded per float width.
//!
//! Each constant is written once as a long decimal literal and narrowed by
//! the compiler to the target width, so `f32` and `f64` each get the nearest
//! representable value. Consumers refer to them by name
//! (`<f32 as MathConst>::HALF_PI`) and never recompute them.

/// π and friends for a floating-point type.
pub trait MathConst: Copy {
    /// π
    const PI: Self;
    /// 2π
    const TWO_PI: Self;
    /// 4π
    const FOUR_PI: Self;
    /// π/2
    const HALF_PI: Self;
    /// π/3
    const THIRD_PI: Self;
    /// 2π/3
    const TWO_THIRDS_PI: Self;
    /// π/4
    const QUARTER_PI: Self;
    /// 3π/4
    const THREE_QUARTERS_PI: Self;
    /// π/6
    const SIXTH_PI: Self;
    /// 5π/6
    const FIVE_SIXTHS_PI: Self;
    /// π/30 (rpm → rad/s)
    const PI_BY_30: Self;
    /// π/180 (degrees → radians)
    const PI_BY_180: Self;
    /// 1/π
    const INV_PI: Self;
    /// 1/(2π)
    const INV_TWO_PI: Self;
    /// 30/π (rad/s → rpm)
    const THIRTY_BY_PI: Self;
    /// 180/π (radians → degrees)
    const ONE_EIGHTY_BY_PI: Self;
    /// √2
    const SQRT_2: Self;
    /// √3
    const SQRT_3: Self;
    /// 1/√2
    const INV_SQRT_2: Self;
    /// 1/√3
    const INV_SQRT_3: Self;
}

macro_rules! impl_math_const {
    ($($t:ty),*) => {
        $(
            impl MathConst for $t {
                const PI: Self = 3.1415926535897932384626433832795028841971693993751 as $t;
                const TWO_PI: Self = 6.2831853071795864769252867665590057683943387987502 as $t;
                const FOUR_PI: Self = 12.5663706143591729538505735331180115367886775975 as $t;
                const HALF_PI: Self = 1.5707963267948966192313216916397514420985846996876 as $t;
                const THIRD_PI: Self = 1.047197551196597746154214461093167628065723133125 as $t;
                const TWO_THIRDS_PI: Self = 2.0943951023931954923084289221863352561314462662501 as $t;
                const QUARTER_PI: Self = 0.78539816339744830961566084581987572104929234984378 as $t;
                const THREE_QUARTERS_PI: Self = 2.3561944901923449288469825374596271631478770495313 as $t;
                const SIXTH_PI: Self = 0.52359877559829887307710723054658381403286156656252 as $t;
                const FIVE_SIXTHS_PI: Self = 2.6179938779914943653855361527329190701643078328126 as $t;
                const PI_BY_30: Self = 0.1047197551196597746154214461093167628065723133125 as $t;
                const PI_BY_180: Self = 0.017453292519943295769236907684886127134428718885417 as $t;
                const INV_PI: Self = 0.31830988618379067153776752674502872406891929148091 as $t;
                const INV_TWO_PI: Self = 0.15915494309189533576888376337251436203445964574046 as $t;
                const THIRTY_BY_PI: Self = 9.5492965855137201461330258023508617220675787444274 as $t;
                const ONE_EIGHTY_BY_PI: Self = 57.295779513082320876798154814105170332405472466564 as $t;
                const SQRT_2: Self = 1.414213562373095048801688724209698078569671875377 as $t;
                const SQRT_3: Self = 1.7320508075688772935274463415058723669428052538104 as $t;
                const INV_SQRT_2: Self = 0.70710678118654752440084436210484903928483593768847 as $t;
                const INV_SQRT_3: Self = 0.57735026918962576450914878050195745564760175127013 as $t;
            }
        )*
    };
}

impl_math_const!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_core_constants() {
        assert_eq!(<f64 as MathConst>::PI, core::f64::consts::PI);
        assert_eq!(<f64 as MathConst>::TWO_PI, core::f64::consts::TAU);
        assert_eq!(<f64 as MathConst>::HALF_PI, core::f64::consts::FRAC_PI_2);
        assert_eq!(<f64 as MathConst>::INV_PI, core::f64::consts::FRAC_1_PI);
        assert_eq!(<f64 as MathConst>::SQRT_2, core::f64::consts::SQRT_2);
        assert_eq!(<f32 as MathConst>::PI, core::f32::consts::PI);
        assert_eq!(<f32 as MathConst>::QUARTER_PI, core::f32::consts::FRAC_PI_4);
        assert_eq!(<f32 as MathConst>::INV_SQRT_2, core::f32::consts::FRAC_1_SQRT_2);
    }

    #[test]
    fn reciprocals_are_consistent() {
        let pi = <f64 as MathConst>::PI;
        assert!((<f64 as MathConst>::INV_TWO_PI * 2.0 * pi - 1.0).abs() < 1e-15);
        assert!((<f64 as MathConst>::PI_BY_180 * <f64 as MathConst>::ONE_EIGHTY_BY_PI - 1.0).abs() < 1e-15);
        assert!((<f64 as MathConst>::SQRT_3 * <f64 as MathConst>::INV_SQRT_3 - 1.0).abs() < 1e-15);
    }
}

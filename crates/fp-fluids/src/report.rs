//! Human-readable result lines, as shown by the calculator forms.

use crate::error::FluidError;
use crate::query::{CriticalPoint, Saturation};
use fp_core::PropertyId;

/// `"<label> = <value>"` with five decimals.
pub fn format_property(output: PropertyId, value: f64) -> String {
    format!("{} = {:.5}", output.label(), value)
}

/// The known value keeps a decimal point (`100.0`, `1.5`), as typed into the form.
pub fn format_saturation(sat: &Saturation) -> String {
    let heading = match sat.property {
        PropertyId::P => "Saturation Pressure",
        _ => "Saturation Temperature",
    };
    format!(
        "{heading} at {:?} {}: {:.3} {}",
        sat.known.value,
        sat.known.id.display_unit(),
        sat.value,
        sat.property.display_unit()
    )
}

pub fn format_critical_point(cp: &CriticalPoint) -> String {
    format!(
        "Critical Temperature: {:.2} {}\nCritical Pressure: {:.2} {}",
        cp.temperature_c,
        PropertyId::Tcrit.display_unit(),
        cp.pressure_bar,
        PropertyId::Pcrit.display_unit()
    )
}

/// Error banner; the diagnostic text is not altered.
pub fn format_error(err: &FluidError) -> String {
    format!("Error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PropertyInput;

    #[test]
    fn property_line_uses_label_and_five_decimals() {
        assert_eq!(
            format_property(PropertyId::H, 2675.570_123_4),
            "enthalpy [kJ/kg] = 2675.57012"
        );
        assert_eq!(format_property(PropertyId::Q, 0.5), "vapour mass frac. [-] = 0.50000");
    }

    #[test]
    fn saturation_phrasing_depends_on_known() {
        let from_t = Saturation {
            known: PropertyInput { id: PropertyId::T, value: 100.0 },
            property: PropertyId::P,
            value: 1.014_179,
        };
        assert_eq!(format_saturation(&from_t), "Saturation Pressure at 100.0 °C: 1.014 bar");

        let from_p = Saturation {
            known: PropertyInput { id: PropertyId::P, value: 1.5 },
            property: PropertyId::T,
            value: 111.349_6,
        };
        assert_eq!(format_saturation(&from_p), "Saturation Temperature at 1.5 bar: 111.350 °C");
    }

    #[test]
    fn whole_known_values_keep_their_decimal_point() {
        let sat = Saturation {
            known: PropertyInput { id: PropertyId::P, value: 10.0 },
            property: PropertyId::T,
            value: 179.884,
        };
        assert_eq!(format_saturation(&sat), "Saturation Temperature at 10.0 bar: 179.884 °C");
    }

    #[test]
    fn critical_point_two_lines() {
        let cp = CriticalPoint {
            temperature_c: 373.946,
            pressure_bar: 220.64,
        };
        assert_eq!(
            format_critical_point(&cp),
            "Critical Temperature: 373.95 °C\nCritical Pressure: 220.64 bar"
        );
    }

    #[test]
    fn error_banner_keeps_engine_text() {
        let err = FluidError::engine("Input pair variable is invalid");
        assert_eq!(format_error(&err), "Error: Input pair variable is invalid");
    }
}

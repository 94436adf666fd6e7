use strum_macros::{AsRefStr, EnumIter, FromRepr, VariantNames};

/// Operating mode of the AEU.
#[derive(FromRepr, Debug, PartialEq, Clone, Copy, Hash, Eq, VariantNames, AsRefStr)]
#[repr(u8)]
pub enum OperatingMode {
    Standby = 0,
    Selftest = 1,
    Alignment = 2,
    FcTvac = 3,
}

/// Binary status used by the cRIO registers. The discriminant is the value
/// reported in the telemetry.
#[derive(FromRepr, Debug, PartialEq, Clone, Copy, Hash, Eq)]
#[repr(u8)]
pub enum IntSwitch {
    Off = 0,
    On = 1,
}

impl IntSwitch {
    /// Is the switch on or not.
    ///
    /// # Returns
    /// True if the switch is on. Otherwise, false.
    pub fn is_on(&self) -> bool {
        *self == IntSwitch::On
    }
}

/// Binary status used by the AWG.
#[derive(Debug, PartialEq, Clone, Copy, VariantNames, AsRefStr)]
pub enum Switch {
    On,
    Off,
}

/// Loopback option of the cRIO for the self test.
#[derive(FromRepr, Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum LoopBack {
    NoLoopback = 0,
    FCamNom = 1,
    FCamRed = 2,
    NCam = 3,
    SvmNom = 4,
    SvmRed = 5,
}

/// Operation mode that the PSU prioritises once the output is enabled.
#[derive(Debug, PartialEq, Clone, Copy, AsRefStr)]
pub enum PriorityMode {
    #[strum(serialize = "CC")]
    ConstantCurrent,
    #[strum(serialize = "CV")]
    ConstantVoltage,
}

/// PSU memory preset.
#[derive(Debug, PartialEq, Clone, Copy, VariantNames, AsRefStr)]
pub enum Memory {
    A,
    B,
    C,
}

/// Waveform type of the AWG channel.
#[derive(Debug, PartialEq, Clone, Copy, VariantNames, AsRefStr)]
pub enum Waveform {
    Arb,
    Square,
}

/// ARB waveform memory slot of the AWG.
#[derive(FromRepr, Debug, PartialEq, Clone, Copy, Hash, Eq, EnumIter, AsRefStr)]
#[repr(u8)]
pub enum ArbSlotId {
    Arb1 = 1,
    Arb2 = 2,
    Arb3 = 3,
    Arb4 = 4,
}

/// Input coupling of the AWG counter.
#[derive(Debug, PartialEq, Clone, Copy, VariantNames, AsRefStr)]
pub enum CounterSource {
    Ac,
    Dc,
}

/// Measurement type of the AWG counter.
#[derive(Debug, PartialEq, Clone, Copy, VariantNames, AsRefStr)]
pub enum CounterType {
    Frequency,
    Period,
    Width,
    NWidth,
    Duty,
}

/// Quality of a measured voltage with respect to the configured
/// protections.
#[derive(FromRepr, Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum VoltageQuality {
    InsideRange = 0,
    OvpDetected = 1,
    UvpDetected = 2,
}

/// Quality of a measured current with respect to the configured
/// protection. There is no under-current case.
#[derive(FromRepr, Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum CurrentQuality {
    InsideRange = 0,
    OcpDetected = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operating_mode_value() {
        // Get the enum from the repr.
        assert_eq!(
            OperatingMode::from_repr(0).unwrap(),
            OperatingMode::Standby
        );
        assert_eq!(OperatingMode::from_repr(3).unwrap(), OperatingMode::FcTvac);

        // Get the enum value.
        assert_eq!(OperatingMode::Selftest as u8, 1);
        assert_eq!(OperatingMode::Alignment as u8, 2);
    }

    #[test]
    fn test_int_switch() {
        assert_eq!(IntSwitch::from_repr(0).unwrap(), IntSwitch::Off);
        assert_eq!(IntSwitch::from_repr(1).unwrap(), IntSwitch::On);

        assert!(IntSwitch::On.is_on());
        assert!(!IntSwitch::Off.is_on());
    }

    #[test]
    fn test_priority_mode() {
        assert_eq!(PriorityMode::ConstantCurrent.as_ref(), "CC");
        assert_eq!(PriorityMode::ConstantVoltage.as_ref(), "CV");
    }

    #[test]
    fn test_arb_slot_id_value() {
        assert_eq!(ArbSlotId::from_repr(1).unwrap(), ArbSlotId::Arb1);
        assert_eq!(ArbSlotId::from_repr(4).unwrap(), ArbSlotId::Arb4);
        assert!(ArbSlotId::from_repr(5).is_none());
    }

    #[test]
    fn test_quality_value() {
        assert_eq!(VoltageQuality::InsideRange as u8, 0);
        assert_eq!(VoltageQuality::OvpDetected as u8, 1);
        assert_eq!(VoltageQuality::UvpDetected as u8, 2);

        assert_eq!(CurrentQuality::InsideRange as u8, 0);
        assert_eq!(CurrentQuality::OcpDetected as u8, 1);
    }
}

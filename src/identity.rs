/// Fixed identification tuple reported by a device, as the answer to the
/// `*IDN?`-style query.
#[derive(Clone, PartialEq, Debug)]
pub struct DeviceIdentity {
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub firmware_version: String,
}

impl DeviceIdentity {
    /// Create a new device identity.
    ///
    /// # Arguments
    /// * `manufacturer` - Manufacturer name.
    /// * `model` - Model name.
    /// * `serial_number` - Serial number.
    /// * `firmware_version` - Firmware version.
    ///
    /// # Returns
    /// A new device identity.
    pub fn new(
        manufacturer: &str,
        model: &str,
        serial_number: &str,
        firmware_version: &str,
    ) -> Self {
        Self {
            manufacturer: String::from(manufacturer),
            model: String::from(model),
            serial_number: String::from(serial_number),
            firmware_version: String::from(firmware_version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let identity = DeviceIdentity::new("National Instruments", "cRIO-9063", "E7CB6B", "1.00");

        assert_eq!(identity.manufacturer, "National Instruments");
        assert_eq!(identity.model, "cRIO-9063");
        assert_eq!(identity.serial_number, "E7CB6B");
        assert_eq!(identity.firmware_version, "1.00");
    }
}

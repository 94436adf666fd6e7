// This file is part of the AEU simulator.
//
// Developed for the camera electrical ground-support equipment.
// See the COPYRIGHT file at the top-level directory of this distribution
// for details of code ownership.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs;
use std::path::{Path, PathBuf};

use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Named ARB waveform profiles shipped as `.arb` files in the data
/// folder.
#[derive(Debug, PartialEq, Clone, Copy, Hash, Eq, EnumIter, EnumString, AsRefStr)]
pub enum ArbDataFile {
    // CCD readout for the N-CAM, per image cycle time.
    #[strum(serialize = "N_CCD_READ_25")]
    NCcdRead25,
    #[strum(serialize = "N_CCD_READ_31_25")]
    NCcdRead3125,
    #[strum(serialize = "N_CCD_READ_37_50")]
    NCcdRead3750,
    #[strum(serialize = "N_CCD_READ_43_75")]
    NCcdRead4375,
    #[strum(serialize = "N_CCD_READ_50")]
    NCcdRead50,
    // CCD readout for the F-CAM (fixed image cycle time).
    #[strum(serialize = "F_CCD_READ")]
    FCcdRead,
    // SVM/TCS heater sync signals matching the CCD readout profiles.
    #[strum(serialize = "SVM_SYNC_CCD_READ_25")]
    SvmSyncCcdRead25,
    #[strum(serialize = "SVM_SYNC_CCD_READ_31_25")]
    SvmSyncCcdRead3125,
    #[strum(serialize = "SVM_SYNC_CCD_READ_37_50")]
    SvmSyncCcdRead3750,
    #[strum(serialize = "SVM_SYNC_CCD_READ_43_75")]
    SvmSyncCcdRead4375,
    #[strum(serialize = "SVM_SYNC_CCD_READ_50")]
    SvmSyncCcdRead50,
    #[strum(serialize = "SVM_SYNC_F_CAM")]
    SvmSyncFCam,
}

impl ArbDataFile {
    /// Get the file name in the data folder.
    pub fn filename(&self) -> &'static str {
        match self {
            ArbDataFile::NCcdRead25 => "ccdRead25.arb",
            ArbDataFile::NCcdRead3125 => "ccdRead31_25.arb",
            ArbDataFile::NCcdRead3750 => "ccdRead37_50.arb",
            ArbDataFile::NCcdRead4375 => "ccdRead43_75.arb",
            ArbDataFile::NCcdRead50 => "ccdRead50.arb",
            ArbDataFile::FCcdRead => "FccdRead.arb",
            ArbDataFile::SvmSyncCcdRead25 => "HeaterSync_ccdRead25.arb",
            ArbDataFile::SvmSyncCcdRead3125 => "HeaterSync_ccdRead31_25.arb",
            ArbDataFile::SvmSyncCcdRead3750 => "HeaterSync_ccdRead37_50.arb",
            ArbDataFile::SvmSyncCcdRead4375 => "HeaterSync_ccdRead43_75.arb",
            ArbDataFile::SvmSyncCcdRead50 => "HeaterSync_ccdRead50.arb",
            ArbDataFile::SvmSyncFCam => "HeaterSync_FccdRead.arb",
        }
    }

    /// Get the declared number of the samples of the profile. The 31.25 s
    /// and the 43.75 s image cycle times need fewer points to keep the
    /// sample period an integer number of microseconds.
    pub fn sample_count(&self) -> usize {
        match self {
            ArbDataFile::NCcdRead3125 | ArbDataFile::SvmSyncCcdRead3125 => 1250,
            ArbDataFile::NCcdRead4375 | ArbDataFile::SvmSyncCcdRead4375 => 1750,
            _ => 3000,
        }
    }
}

/// ARB waveform sample data that can be sent to or received from the AWG.
#[derive(Clone, PartialEq, Debug)]
pub struct ArbData {
    // Signed 16-bit samples.
    samples: Vec<i16>,
}

impl ArbData {
    /// Create the ARB data from the samples.
    ///
    /// # Arguments
    /// * `samples` - Samples.
    ///
    /// # Returns
    /// A new ARB data object.
    pub fn new(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Parse the ARB data from the content of a `.arb` file. The first
    /// line declares the format (always "HEX"), the rest is the samples
    /// as 4-character hexadecimal numbers, optionally blank-separated.
    /// The numbers are folded into the signed range, e.g. FFFF is -1.
    ///
    /// # Arguments
    /// * `content` - File content.
    ///
    /// # Returns
    /// The parsed ARB data.
    pub fn from_hex_file_content(content: &str) -> Self {
        let (header, data) = content
            .split_once('\n')
            .expect("Should have a format header line in the ARB data");

        let data_format = header.trim().split('\t').next().unwrap_or("");
        assert!(
            data_format == "HEX",
            "The first line in the ARB data file should be: HEX"
        );

        let hex_string: String = data.chars().filter(|c| !c.is_whitespace()).collect();
        assert!(hex_string.len() % 4 == 0);

        let samples = (0..hex_string.len() / 4)
            .map(|index| {
                let hex_number = &hex_string[index * 4..index * 4 + 4];

                u16::from_str_radix(hex_number, 16)
                    .expect(&format!("{hex_number} should be a hexadecimal number"))
                    as i16
            })
            .collect();

        Self { samples }
    }

    /// Get the samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Get the number of the samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the samples as big-endian bytes.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.samples
            .iter()
            .flat_map(|sample| sample.to_be_bytes())
            .collect()
    }

    /// Encode the ARB data as the binary block the AWG accepts: the
    /// #-symbol, the number of digits of the byte count, the byte count
    /// and the big-endian sample bytes.
    ///
    /// # Returns
    /// The encoded block.
    pub fn encode(&self) -> Vec<u8> {
        let payload = self.as_bytes();
        let num_bytes = payload.len().to_string();

        let mut block = format!("#{}{}", num_bytes.len(), num_bytes).into_bytes();
        block.extend_from_slice(&payload);

        block
    }

    /// Decode the ARB data from a binary block.
    ///
    /// # Arguments
    /// * `block` - Encoded block.
    ///
    /// # Returns
    /// The decoded ARB data.
    pub fn decode(block: &[u8]) -> Self {
        assert!(block.len() >= 2 && block[0] == b'#');

        let len_num_bytes = (block[1] as char)
            .to_digit(10)
            .expect("Should have the digit count after the #-symbol")
            as usize;
        let payload = &block[2 + len_num_bytes..];
        assert!(payload.len() % 2 == 0);

        let samples = payload
            .chunks_exact(2)
            .map(|pair| i16::from_be_bytes([pair[0], pair[1]]))
            .collect();

        Self { samples }
    }
}

/// Resolves the named waveform profiles against the `.arb` files in a
/// data folder.
pub struct ArbDataStore {
    _dirpath: PathBuf,
}

impl ArbDataStore {
    /// ARB data store.
    ///
    /// # Arguments
    /// * `dirpath` - Path to the folder with the `.arb` files.
    ///
    /// # Returns
    /// A new ARB data store.
    pub fn new(dirpath: &Path) -> Self {
        Self {
            _dirpath: dirpath.to_path_buf(),
        }
    }

    /// Load the ARB data of the profile.
    ///
    /// # Arguments
    /// * `profile` - Waveform profile.
    ///
    /// # Returns
    /// The ARB data.
    pub fn load(&self, profile: ArbDataFile) -> ArbData {
        let filepath = self._dirpath.join(profile.filename());
        let content = fs::read_to_string(&filepath)
            .expect(&format!("Should be able to read the {:?}", filepath));

        ArbData::from_hex_file_content(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;
    use strum::IntoEnumIterator;

    use crate::constants::DEFAULT_ARB_DATA_DIR;

    #[test]
    fn test_arb_data_file() {
        assert_eq!(ArbDataFile::NCcdRead25.filename(), "ccdRead25.arb");
        assert_eq!(
            ArbDataFile::SvmSyncCcdRead3125.filename(),
            "HeaterSync_ccdRead31_25.arb"
        );

        assert_eq!(ArbDataFile::NCcdRead25.sample_count(), 3000);
        assert_eq!(ArbDataFile::NCcdRead3125.sample_count(), 1250);
        assert_eq!(ArbDataFile::NCcdRead4375.sample_count(), 1750);
        assert_eq!(ArbDataFile::FCcdRead.sample_count(), 3000);

        assert_eq!(
            ArbDataFile::from_str("N_CCD_READ_31_25").unwrap(),
            ArbDataFile::NCcdRead3125
        );
        assert_eq!(ArbDataFile::SvmSyncFCam.as_ref(), "SVM_SYNC_F_CAM");
    }

    #[test]
    fn test_from_hex_file_content() {
        // Blank-separated, with folding of FFFF and 8001.
        let data = ArbData::from_hex_file_content("HEX\n7FFF FFFF 0000 0001 8001\n");

        assert_eq!(data.samples(), &[32767, -1, 0, 1, -32767]);

        // Without the blanks.
        let data = ArbData::from_hex_file_content("HEX\n000100020003");

        assert_eq!(data.samples(), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "The first line in the ARB data file should be: HEX")]
    fn test_from_hex_file_content_wrong_format() {
        ArbData::from_hex_file_content("BIN\n0001");
    }

    #[test]
    fn test_encode() {
        let data = ArbData::new(vec![1, -1]);

        // 4 payload bytes, so the header is "#14".
        assert_eq!(data.encode(), b"#14\x00\x01\xFF\xFF");
    }

    #[test]
    fn test_decode() {
        let data = ArbData::new(vec![32767, -1, 0, 258]);

        assert_eq!(ArbData::decode(&data.encode()), data);
    }

    #[test]
    fn test_store_load() {
        let store = ArbDataStore::new(Path::new(DEFAULT_ARB_DATA_DIR));

        let data = store.load(ArbDataFile::NCcdRead3125);

        assert_eq!(data.len(), ArbDataFile::NCcdRead3125.sample_count());
        assert_eq!(data.as_bytes().len(), 2500);

        let data = store.load(ArbDataFile::NCcdRead25);

        assert_eq!(data.len(), 3000);
    }

    #[test]
    fn test_store_load_all_profiles() {
        let store = ArbDataStore::new(Path::new(DEFAULT_ARB_DATA_DIR));

        // Every shipped file holds its declared number of samples.
        for profile in ArbDataFile::iter() {
            let data = store.load(profile);

            assert_eq!(data.len(), profile.sample_count(), "{}", profile.as_ref());
        }
    }

    #[test]
    fn test_store_load_scratch_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ccdRead25.arb"), "HEX\n0001 FFFF\n").unwrap();

        let store = ArbDataStore::new(dir.path());

        assert_eq!(store.load(ArbDataFile::NCcdRead25).samples(), &[1, -1]);
    }
}

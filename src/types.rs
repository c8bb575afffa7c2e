//! Static table mapping RF configuration type codes to parameter names.
//!
//! The table covers the configuration parameters an NCI controller
//! understands. It exists purely for diagnostics: codes missing from it
//! (reserved for future use) are still valid on the wire and round-trip
//! unchanged, they just have no well-known name.
//!
//! The table is compile-time data sorted by type code; lookups are a binary
//! search and there is no mutation API.

/// Known RF configuration parameter names, sorted by type code.
pub const KNOWN_TYPES: &[(u8, &str)] = &[
    // COMMON
    (0x00, "TOTAL_DURATION"),
    (0x01, "CON_DEVICES_LIMIT"),
    (0x02, "CON_DISCOVERY_PARAM"),
    (0x03, "POWER_STATE"),
    // 0x04 - 0x07 RFU

    // POLL A
    (0x08, "PA_BAIL_OUT"),
    (0x09, "PA_DEVICES_LIMIT"),
    // 0x0A - 0x0F RFU

    // POLL B
    (0x10, "PB_AFI"),
    (0x11, "PB_BAIL_OUT"),
    (0x12, "PB_ATTRIB_PARAM1"),
    (0x13, "PB_SENSB_REQ_PARAM"),
    (0x14, "PB_DEVICES_LIMIT"),
    // 0x15 - 0x17 RFU

    // POLL F
    (0x18, "PF_BIT_RATE"),
    (0x19, "PF_RC_CODE"),
    (0x1A, "PF_DEVICES_LIMIT"),
    // 0x1B - 0x1F RFU

    // POLL ISO-DEP
    (0x20, "PB_H_INFO"),
    (0x21, "PI_BIT_RATE"),
    (0x22, "PA_ADV_FEAT"),
    // 0x23 - 0x27 RFU

    // POLL NFC-DEP
    (0x28, "PN_NFC_DEP_SPEED"),
    (0x29, "PN_ATR_REQ_GEN_BYTES"),
    (0x2A, "PN_ATR_REQ_CONFIG"),
    // 0x2B - 0x2E RFU

    // POLL NFC-V
    (0x2F, "PV_DEVICES_LIMIT"),
    // LISTEN A
    (0x30, "LA_BIT_FRAME_SDD"),
    (0x31, "LA_PLATFORM_CONFIG"),
    (0x32, "LA_SEL_INFO"),
    (0x33, "LA_NFCID1"),
    // 0x34 - 0x37 RFU

    // LISTEN B
    (0x38, "LB_SENSB_INFO"),
    (0x39, "LB_NFCID0"),
    (0x3A, "LB_APPLICATION_DATA"),
    (0x3B, "LB_SFGI"),
    (0x3C, "LB_FWI_ADC_FO"),
    // 0x3D RFU
    (0x3E, "LB_BIT_RATE"),
    // 0x3F RFU

    // LISTEN F
    (0x40, "LF_T3T_IDENTIFIERS_1"),
    (0x41, "LF_T3T_IDENTIFIERS_2"),
    (0x42, "LF_T3T_IDENTIFIERS_3"),
    (0x43, "LF_T3T_IDENTIFIERS_4"),
    (0x44, "LF_T3T_IDENTIFIERS_5"),
    (0x45, "LF_T3T_IDENTIFIERS_6"),
    (0x46, "LF_T3T_IDENTIFIERS_7"),
    (0x47, "LF_T3T_IDENTIFIERS_8"),
    (0x48, "LF_T3T_IDENTIFIERS_9"),
    (0x49, "LF_T3T_IDENTIFIERS_10"),
    (0x4A, "LF_T3T_IDENTIFIERS_11"),
    (0x4B, "LF_T3T_IDENTIFIERS_12"),
    (0x4C, "LF_T3T_IDENTIFIERS_13"),
    (0x4D, "LF_T3T_IDENTIFIERS_14"),
    (0x4E, "LF_T3T_IDENTIFIERS_15"),
    (0x4F, "LF_T3T_IDENTIFIERS_16"),
    (0x50, "LF_PROTOCOL_TYPE"),
    // 0x51 - 0x57 RFU

    // LISTEN ISO-DEP
    (0x58, "LI_A_RATS_TB1"),
    (0x59, "LA_HIST_BY"),
    (0x5A, "LB_H_INFO_RESP"),
    (0x5B, "LI_BIT_RATE"),
    (0x5C, "LI_A_RATS_TC1"),
    // 0x5D - 0x5F RFU

    // LISTEN NFC-DEP
    (0x60, "LN_WT"),
    (0x61, "LN_ATR_RES_GEN_BYTES"),
    (0x62, "LN_ATR_RES_CONFIG"),
    // 0x63 - 0x67 RFU

    // ACTIVE / WLC / OTHER
    (0x68, "PACM_BIT_RATE"),
    (0x69, "WLC_CAP_POWER_CLASS"),
    (0x6A, "TOT_POWER_STEPS"),
    (0x6B, "WLC_AUTO_CAPABILITIES"),
    // 0x6C - 0x7F RFU

    // OTHER
    (0x80, "RF_FIELD_INFO"),
    (0x81, "RF_NFCEE_ACTION"),
    (0x82, "NFCDEP_OP"),
    (0x83, "LLCP_VERSION"),
    (0x85, "NFCC_CONFIG_CONTROL"),
    (0x86, "RF_WLC_STATUS_CONFIG"),
    // 0x87 - 0x9F RFU
];

/// Look up the well-known name of a type code.
///
/// # Parameters
/// * `type_code` - The RF configuration parameter code
///
/// # Returns
/// * `Some(name)` if the code is a known parameter
/// * `None` if the code is reserved or otherwise unknown
///
/// # Examples
///
/// ```
/// use nci_config_wire::types::name_of;
///
/// assert_eq!(name_of(0x01), Some("CON_DEVICES_LIMIT"));
/// assert_eq!(name_of(0x90), None);
/// ```
pub fn name_of(type_code: u8) -> Option<&'static str> {
    KNOWN_TYPES
        .binary_search_by_key(&type_code, |&(code, _)| code)
        .ok()
        .map(|index| KNOWN_TYPES[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted_and_unique() {
        // Binary search relies on strictly ascending codes.
        for pair in KNOWN_TYPES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:#04X} out of order", pair[1].0);
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(name_of(0x00), Some("TOTAL_DURATION"));
        assert_eq!(name_of(0x33), Some("LA_NFCID1"));
        assert_eq!(name_of(0x4F), Some("LF_T3T_IDENTIFIERS_16"));
        assert_eq!(name_of(0x86), Some("RF_WLC_STATUS_CONFIG"));
    }

    #[test]
    fn test_reserved_codes() {
        // Gaps inside the table.
        assert_eq!(name_of(0x04), None);
        assert_eq!(name_of(0x3D), None);
        assert_eq!(name_of(0x84), None);
        // Past the last entry.
        assert_eq!(name_of(0x90), None);
        assert_eq!(name_of(0xFF), None);
    }
}

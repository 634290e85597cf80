use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One record of the `seriescalc` hourly series.
///
/// Series the server did not return (for example `P` when `pvcalculation=0`) are
/// read as `0.0`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HourlyRecord {
    /// Timestamp in UTC. PVGIS reports it as `YYYYMMDD:HHMM`.
    #[serde(with = "pvgis_time")]
    pub time: NaiveDateTime,
    /// PV system power [W].
    #[serde(rename = "P", default)]
    pub power: f64,
    /// Global irradiance on the inclined plane [W/m2].
    #[serde(rename = "G(i)", default)]
    pub global_irradiance: f64,
    /// Direct irradiance on the inclined plane [W/m2], only present with `components=1`.
    #[serde(rename = "Gb(i)", default)]
    pub direct_irradiance: f64,
    /// Diffuse irradiance on the inclined plane [W/m2], only present with `components=1`.
    #[serde(rename = "Gd(i)", default)]
    pub diffuse_irradiance: f64,
    /// Sun height [degree].
    #[serde(rename = "H_sun", default)]
    pub sun_height: f64,
    /// 2-m air temperature [degree Celsius].
    #[serde(rename = "T2m", default)]
    pub temperature: f64,
    /// 10-m total wind speed [m/s].
    #[serde(rename = "WS10m", default)]
    pub wind_speed: f64,
    /// `1` when the solar radiation values are reconstructed.
    #[serde(rename = "Int", default)]
    pub reconstructed: f64,
}

mod pvgis_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y%m%d:%H%M";

    pub fn serialize<S: Serializer>(
        time: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use serde_json::json;

    #[test]
    fn test_parse_record() -> Result<(), serde_json::Error> {
        let record: HourlyRecord = serde_json::from_value(json!({
            "time": "20100101:0010",
            "P": 50.0,
            "G(i)": 120.5,
            "H_sun": 3.2,
            "T2m": -1.5,
            "WS10m": 2.1,
            "Int": 0.0
        }))?;

        assert_eq!(record.time.date(), NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!(record.time.hour(), 0);
        assert_eq!(record.time.minute(), 10);
        assert_eq!(record.power, 50.0);
        assert_eq!(record.global_irradiance, 120.5);
        assert_eq!(record.direct_irradiance, 0.0);
        assert_eq!(record.temperature, -1.5);
        Ok(())
    }

    #[test]
    fn test_missing_series_default_to_zero() -> Result<(), serde_json::Error> {
        let record: HourlyRecord = serde_json::from_value(json!({"time": "20191231:2310"}))?;
        assert_eq!(record.power, 0.0);
        assert_eq!(record.global_irradiance, 0.0);
        assert_eq!(record.time.hour(), 23);
        Ok(())
    }

    #[test]
    fn test_serialize_keeps_pvgis_names() -> Result<(), serde_json::Error> {
        let record: HourlyRecord =
            serde_json::from_value(json!({"time": "20150615:1210", "P": 7.0}))?;
        let value = serde_json::to_value(&record)?;
        assert_eq!(value["time"], "20150615:1210");
        assert_eq!(value["P"], 7.0);
        Ok(())
    }

    #[test]
    fn test_rejects_malformed_time() {
        let result = serde_json::from_value::<HourlyRecord>(json!({"time": "2010-01-01 00:10"}));
        assert!(result.is_err());
    }
}

//! EC2-backed region describer.
//!
//! Opens an SDK session pinned to the home region. The session is only used
//! to list the other regions.

use crate::core::{Error, Result};
use crate::provider::client::{RegionDescriber, RegionRecord};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::Client;

/// Region describer calling EC2 `DescribeRegions`.
#[derive(Clone, Debug)]
pub struct Ec2RegionDescriber {
    client: Client,
    home_region: String,
}

impl Ec2RegionDescriber {
    /// Load the default credential chain and connect to `home_region`.
    pub async fn connect(home_region: &str) -> Result<Self> {
        let home_region = home_region.trim();
        if home_region.is_empty() {
            return Err(Error::Config("home region cannot be empty".to_string()));
        }

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(home_region.to_string()))
            .load()
            .await;

        Ok(Self::from_client(Client::new(&sdk_config), home_region))
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client, home_region: &str) -> Self {
        Self {
            client,
            home_region: home_region.to_string(),
        }
    }

    /// Region the session is pinned to.
    pub fn home_region(&self) -> &str {
        &self.home_region
    }
}

#[async_trait]
impl RegionDescriber for Ec2RegionDescriber {
    async fn describe_regions(&self) -> Result<Vec<RegionRecord>> {
        let output = self
            .client
            .describe_regions()
            .send()
            .await
            .map_err(|err| Error::Provider(DisplayErrorContext(&err).to_string()))?;

        Ok(output
            .regions()
            .iter()
            .map(|region| RegionRecord {
                region_name: region.region_name().map(str::to_string),
                endpoint: region.endpoint().map(str::to_string),
                opt_in_status: region.opt_in_status().map(str::to_string),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_empty_region() {
        let result = Ec2RegionDescriber::connect("  ").await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_client_keeps_home_region() {
        let config = aws_sdk_ec2::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-west-1"))
            .build();
        let describer = Ec2RegionDescriber::from_client(Client::from_conf(config), "eu-west-1");

        assert_eq!(describer.home_region(), "eu-west-1");
    }
}

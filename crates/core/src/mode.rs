use serde::Serialize;

/// Which flavor of RDS parameter group a command operates on.
///
/// Instance parameter groups are attached to DB instances, cluster parameter
/// groups to Aurora/Multi-AZ DB clusters. The two share the same shape but use
/// different field names in the RDS API, different list/describe calls and a
/// different Terraform resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Instance,
    Cluster,
}

impl Mode {
    /// Family field name, the same for instance and cluster groups
    pub const GROUP_FAMILY_FIELD: &'static str = "DBParameterGroupFamily";

    /// Select the mode from the `--cluster` flag
    pub fn from_cluster_flag(cluster: bool) -> Self {
        if cluster {
            Mode::Cluster
        } else {
            Mode::Instance
        }
    }

    pub fn group_name_field(self) -> &'static str {
        match self {
            Mode::Instance => "DBParameterGroupName",
            Mode::Cluster => "DBClusterParameterGroupName",
        }
    }

    pub fn group_arn_field(self) -> &'static str {
        match self {
            Mode::Instance => "DBParameterGroupArn",
            Mode::Cluster => "DBClusterParameterGroupArn",
        }
    }

    /// Column header for the databases side of the mapping table
    pub fn databases_header(self) -> &'static str {
        match self {
            Mode::Instance => "DBInstances",
            Mode::Cluster => "DBClusters",
        }
    }

    /// Identifier of the Terraform template rendered for this mode
    pub fn template_name(self) -> &'static str {
        match self {
            Mode::Instance => "terraform_instance",
            Mode::Cluster => "terraform_cluster",
        }
    }
}

//! Supports extracting DH parameters and body spheres from YAML file (optional)

use std::path::Path;
use nalgebra::{Point3, Rotation3, Translation3, Vector3};
use regex::Regex;
use tracing::debug;
use yaml_rust2::{Yaml, YamlLoader};

use crate::arm_model::ArmModel;
use crate::body_sphere::BodySphere;
use crate::kinematic_traits::Pose;
use crate::kinematics_impl::Arm;
use crate::parameter_error::ParameterError;
use crate::parameters::dh_kinematics::Parameters;

impl Parameters {
    /// Read the arm DH parameters from YAML file. YAML file like this is supported:
    /// ```yaml
    /// dh_parameters:
    ///   a: [0.0, 0.0, 0.045, -0.045, 0.0, 0.0, 0.0]
    ///   alpha: [deg(-90), deg(90), deg(-90), deg(90), deg(-90), deg(90), 0]
    ///   d: [0.0, 0.0, 0.55, 0.0, 0.3, 0.0, 0.06]
    ///   theta_bias: [0, 0, 0, 0, 0, 0, 0]
    /// ```
    /// Joint bias is optional. Angles are in radians unless written as deg(angle).
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as [`from_yaml_file`](Self::from_yaml_file), reading from the string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let doc = load_document(contents)?;
        Reader::new()?.parameters(&doc)
    }
}

impl ArmModel {
    /// Read the complete model: DH parameters, optional base pose and optional body spheres.
    /// ```yaml
    /// dh_parameters:
    ///   a: [1.0, 1.0]
    ///   alpha: [0.0, 0.0]
    ///   d: [0.0, 0.0]
    /// base_pose:
    ///   translation: [2.0, 1.0, -1.0]
    ///   rotation: [0, 0, deg(45)] # roll, pitch, yaw
    /// body_spheres:
    ///   - { link: 0, radius: 0.5, center: [-1.0, 0.0, 0.0] }
    ///   - { link: 1, radius: 0.1, center: [0.0, 0.0, 0.0] }
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        debug!("Reading arm model from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as [`from_yaml_file`](Self::from_yaml_file), reading from the string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let doc = load_document(contents)?;
        let reader = Reader::new()?;
        let parameters = reader.parameters(&doc)?;
        let base_pose = reader.base_pose(&doc["base_pose"])?;
        let spheres = reader.spheres(&doc["body_spheres"])?;

        let arm = Arm::from_parameters(parameters, base_pose)?;
        Ok(ArmModel::new(arm, spheres)?)
    }
}

fn load_document(contents: &str) -> Result<Yaml, ParameterError> {
    let mut docs = YamlLoader::load_from_str(contents)
        .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
    if docs.is_empty() {
        return Err(ParameterError::ParseError("empty YAML document".to_string()));
    }
    Ok(docs.swap_remove(0))
}

fn is_missing(value: &Yaml) -> bool {
    value.is_badvalue() || value.is_null()
}

struct Reader {
    deg: Regex,
}

impl Reader {
    fn new() -> Result<Self, ParameterError> {
        let deg = Regex::new(r"^deg\(\s*([-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?)\s*\)$")
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        Ok(Reader { deg })
    }

    fn parameters(&self, doc: &Yaml) -> Result<Parameters, ParameterError> {
        let dh = &doc["dh_parameters"];
        if is_missing(dh) {
            return Err(ParameterError::MissingField("dh_parameters".to_string()));
        }
        let a = self.numbers(&dh["a"], "a")?;
        let alpha = self.numbers(&dh["alpha"], "alpha")?;
        let d = self.numbers(&dh["d"], "d")?;
        let mut parameters = Parameters::new(a, alpha, d);
        if !is_missing(&dh["theta_bias"]) {
            parameters.theta_bias = self.numbers(&dh["theta_bias"], "theta_bias")?;
        }
        parameters.validate(parameters.dof())?;
        debug!("Read DH parameters for {} joints", parameters.dof());
        Ok(parameters)
    }

    fn base_pose(&self, value: &Yaml) -> Result<Pose, ParameterError> {
        if is_missing(value) {
            return Ok(Pose::identity());
        }
        let translation = match &value["translation"] {
            v if is_missing(v) => Vector3::zeros(),
            v => self.vector3(v, "base_pose.translation")?,
        };
        let rotation = match &value["rotation"] {
            v if is_missing(v) => Rotation3::identity(),
            v => {
                let rpy = self.vector3(v, "base_pose.rotation")?;
                Rotation3::from_euler_angles(rpy.x, rpy.y, rpy.z)
            }
        };
        Ok(Pose::from_parts(Translation3::from(translation), rotation))
    }

    fn spheres(&self, value: &Yaml) -> Result<Vec<BodySphere>, ParameterError> {
        if is_missing(value) {
            return Ok(Vec::new());
        }
        let entries = value.as_vec().ok_or_else(||
            ParameterError::ParseError("body_spheres must be a list".to_string()))?;

        let mut spheres = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let link = match &entry["link"] {
                Yaml::Integer(link) if *link >= 0 => *link as usize,
                v if is_missing(v) =>
                    return Err(ParameterError::MissingField(format!("body_spheres[{}].link", i))),
                v => return Err(ParameterError::ParseError(format!(
                    "body_spheres[{}].link must be a non-negative integer (got {:?})", i, v
                ))),
            };
            let radius = self.number(&entry["radius"], &format!("body_spheres[{}].radius", i))?;
            if radius < 0.0 {
                return Err(ParameterError::ParseError(format!(
                    "body_spheres[{}].radius must not be negative (got {})", i, radius
                )));
            }
            let center = self.vector3(&entry["center"], &format!("body_spheres[{}].center", i))?;
            spheres.push(BodySphere::new(link, radius, Point3::from(center)));
        }
        debug!("Read {} body spheres", spheres.len());
        Ok(spheres)
    }

    fn vector3(&self, value: &Yaml, field: &str) -> Result<Vector3<f64>, ParameterError> {
        let values = self.numbers(value, field)?;
        if values.len() != 3 {
            return Err(ParameterError::InvalidLength { expected: 3, found: values.len() });
        }
        Ok(Vector3::new(values[0], values[1], values[2]))
    }

    fn numbers(&self, value: &Yaml, field: &str) -> Result<Vec<f64>, ParameterError> {
        if is_missing(value) {
            return Err(ParameterError::MissingField(field.to_string()));
        }
        let items = value.as_vec().ok_or_else(||
            ParameterError::ParseError(format!("'{}' must be a list of numbers", field)))?;
        items.iter().enumerate()
            .map(|(i, item)| self.number(item, &format!("{}[{}]", field, i)))
            .collect()
    }

    /// Integer, real or deg(angle), the latter converted to radians. Must be finite.
    fn number(&self, value: &Yaml, field: &str) -> Result<f64, ParameterError> {
        let x = match value {
            Yaml::Real(_) => value.as_f64().ok_or_else(||
                ParameterError::ParseError(format!("'{}' is not a valid number", field)))?,
            Yaml::Integer(i) => *i as f64,
            Yaml::String(s) => self.angle(s, field)?,
            v if is_missing(v) => return Err(ParameterError::MissingField(field.to_string())),
            v => return Err(ParameterError::ParseError(format!(
                "'{}' must be a number (got {:?})", field, v
            ))),
        };
        if !x.is_finite() {
            return Err(ParameterError::ParseError(format!(
                "'{}' must be finite (got {})", field, x
            )));
        }
        Ok(x)
    }

    fn angle(&self, text: &str, field: &str) -> Result<f64, ParameterError> {
        let degrees = self.deg.captures(text.trim())
            .and_then(|captures| captures.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .ok_or_else(|| ParameterError::WrongAngle(format!("'{}': {}", field, text)))?;
        Ok(degrees.to_radians())
    }
}

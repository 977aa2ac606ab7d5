//! Native platform source for Linux and BSD systems.
//!
//! - Linux: reads /proc and /sys directly
//! - BSD: falls back to sysctl and libc where procfs is absent
//!
//! Every read degrades to a deterministic fallback instead of surfacing a
//! platform error into the codec.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, trace};

use super::{fold_serial, hash_mac_bytes, hash_name, PlatformSource};

/// Reads machine attributes from the local operating system.
#[derive(Debug, Clone)]
pub struct NativeSource {
    proc_root: PathBuf,
    sys_root: PathBuf,
    volume_path: PathBuf,
}

impl NativeSource {
    pub fn new() -> Self {
        Self::with_roots("/proc", "/sys", "/")
    }

    /// Source rooted at alternative paths. Tests point this at fixture
    /// trees instead of the live system.
    pub fn with_roots(
        proc_root: impl Into<PathBuf>,
        sys_root: impl Into<PathBuf>,
        volume_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            proc_root: proc_root.into(),
            sys_root: sys_root.into(),
            volume_path: volume_path.into(),
        }
    }
}

impl Default for NativeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformSource for NativeSource {
    fn cpu_hash(&self) -> u16 {
        hash_name(&read_cpu_identity(&self.proc_root))
    }

    fn volume_hash(&self) -> u16 {
        match read_volume_serial(&self.volume_path) {
            Some(serial) => fold_serial(serial),
            None => {
                debug!(path = ?self.volume_path, "volume serial unavailable, using fallback");
                0
            }
        }
    }

    fn mac_hashes(&self) -> (u16, u16) {
        read_mac_hashes(&self.sys_root)
    }

    fn machine_name(&self) -> String {
        read_hostname(&self.proc_root)
    }
}

// ============================================================================
// CPU Identification
// ============================================================================

/// Read a stable CPU identification string.
///
/// Linux: vendor_id plus model name from /proc/cpuinfo (first package).
/// BSD: `sysctl -n hw.model`. Empty string when nothing is readable.
fn read_cpu_identity(proc_root: &Path) -> String {
    if let Ok(cpuinfo) = fs::read_to_string(proc_root.join("cpuinfo")) {
        let mut vendor = None;
        let mut model = None;
        for line in cpuinfo.lines() {
            let lower = line.to_ascii_lowercase();
            if vendor.is_none() && lower.starts_with("vendor_id") {
                vendor = field_value(line);
            }
            if model.is_none() && lower.starts_with("model name") {
                model = field_value(line);
            }
            if vendor.is_some() && model.is_some() {
                break;
            }
        }
        let identity = format!(
            "{}{}",
            vendor.unwrap_or_default(),
            model.unwrap_or_default()
        );
        if !identity.is_empty() {
            trace!(identity = %identity, "cpu identity from cpuinfo");
            return identity;
        }
    }

    // BSD: sysctl hw.model
    if let Ok(output) = Command::new("sysctl").args(["-n", "hw.model"]).output() {
        if output.status.success() {
            let model = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !model.is_empty() {
                return model;
            }
        }
    }

    debug!("cpu identity unavailable, using fallback");
    String::new()
}

/// Value after the `:` in a cpuinfo line.
fn field_value(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Volume Serial
// ============================================================================

/// Device id of the filesystem holding `path`.
///
/// The stable Unix analogue of a volume serial number; survives process
/// restarts for the same mounted root.
fn read_volume_serial(path: &Path) -> Option<u64> {
    use std::os::unix::fs::MetadataExt;

    fs::metadata(path).ok().map(|m| m.dev())
}

// ============================================================================
// Network Hardware Addresses
// ============================================================================

/// Hash the first two usable interface hardware addresses under
/// `{sys_root}/class/net`, in sorted interface-name order.
///
/// Loopback and all-zero addresses are skipped; missing adapters report
/// zero.
fn read_mac_hashes(sys_root: &Path) -> (u16, u16) {
    let net_dir = sys_root.join("class/net");
    let mut names: Vec<String> = Vec::new();
    match fs::read_dir(&net_dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        Err(_) => {
            debug!(path = ?net_dir, "cannot enumerate network interfaces");
            return (0, 0);
        }
    }
    // read_dir order is not deterministic.
    names.sort();

    let mut hashes: Vec<u16> = Vec::new();
    for name in names {
        if name == "lo" {
            continue;
        }
        let addr_path = net_dir.join(&name).join("address");
        let addr = match fs::read_to_string(&addr_path) {
            Ok(text) => text,
            Err(_) => continue,
        };
        let bytes = match parse_mac(addr.trim()) {
            Some(bytes) => bytes,
            None => continue,
        };
        if bytes.iter().all(|b| *b == 0) {
            continue;
        }
        trace!(interface = %name, "hashed interface address");
        hashes.push(hash_mac_bytes(&bytes));
        if hashes.len() == 2 {
            break;
        }
    }

    (
        hashes.first().copied().unwrap_or(0),
        hashes.get(1).copied().unwrap_or(0),
    )
}

/// Parse a colon-separated hardware address into bytes.
fn parse_mac(text: &str) -> Option<Vec<u8>> {
    if text.is_empty() {
        return None;
    }
    text.split(':')
        .map(|part| u8::from_str_radix(part, 16).ok())
        .collect()
}

// ============================================================================
// Machine Name
// ============================================================================

/// Read the host name: procfs first, then the libc call for systems
/// without /proc. Empty string when both fail.
fn read_hostname(proc_root: &Path) -> String {
    if let Ok(hostname) = fs::read_to_string(proc_root.join("sys/kernel/hostname")) {
        let h = hostname.trim();
        if !h.is_empty() {
            return h.to_string();
        }
    }

    let mut buf = [0u8; 256];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc == 0 {
        let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
        if let Ok(name) = std::str::from_utf8(&buf[..end]) {
            return name.to_string();
        }
    }

    debug!("hostname unavailable, using fallback");
    String::new()
}

// ============================================================================
// Tests
// ============================================================================

mod config_layering;
mod scan_manifest;

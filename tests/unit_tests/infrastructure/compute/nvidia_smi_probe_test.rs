use harmonify::application::ports::AcceleratorProbe;
use harmonify::infrastructure::compute::{NvidiaSmiProbe, parse_gpu_listing};

#[test]
fn given_two_gpu_rows_when_parsing_then_memory_is_converted_to_bytes() {
    let listing = "NVIDIA GeForce RTX 3090, 24576\nTesla V100-SXM2-16GB, 16384\n";

    let gpus = parse_gpu_listing(listing);

    assert_eq!(gpus.len(), 2);
    assert_eq!(gpus[0].name, "NVIDIA GeForce RTX 3090");
    assert_eq!(gpus[0].total_memory_bytes, 24_576 * 1024 * 1024);
    assert_eq!(gpus[1].name, "Tesla V100-SXM2-16GB");
}

#[test]
fn given_name_containing_comma_when_parsing_then_splits_on_last_comma() {
    let gpus = parse_gpu_listing("Vendor, Model X, 8192");

    assert_eq!(gpus[0].name, "Vendor, Model X");
    assert_eq!(gpus[0].total_memory_bytes, 8_192 * 1024 * 1024);
}

#[test]
fn given_malformed_rows_when_parsing_then_they_are_skipped() {
    let gpus = parse_gpu_listing("\nNo devices were found\n, 1024\nGPU, [N/A]\n");

    assert!(gpus.is_empty());
}

#[test]
fn given_missing_binary_when_probing_then_reports_no_accelerators() {
    let probe = NvidiaSmiProbe::new("/nonexistent/nvidia-smi");

    assert!(probe.dedicated_accelerators().is_empty());
}

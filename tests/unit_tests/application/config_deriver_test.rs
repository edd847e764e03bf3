use std::sync::Arc;

use harmonify::application::services::ConfigDeriver;
use harmonify::domain::{DeviceKind, DeviceRequest, InferenceWindowConfig, Precision};
use harmonify::infrastructure::compute::StaticAcceleratorProbe;

const GIB: u64 = 1024 * 1024 * 1024;

fn deriver(probe: StaticAcceleratorProbe) -> ConfigDeriver {
    ConfigDeriver::new(Arc::new(probe))
}

#[test]
fn given_flagged_accelerator_when_requesting_half_then_single_precision_is_forced() {
    let probe = StaticAcceleratorProbe::cpu_only().with_accelerator("NVIDIA GeForce GTX 1070", 8 * GIB);

    let context = deriver(probe)
        .derive(DeviceRequest::Accelerator(0), Precision::Half, Some(4))
        .unwrap();

    assert_eq!(context.device.kind, DeviceKind::GenericGpu);
    assert_eq!(context.precision, Precision::Single);
    assert!(context.device.forced_single_precision);
    assert_eq!(context.window, InferenceWindowConfig::SINGLE_PRECISION);
}

#[test]
fn given_v100_sixteen_gigabytes_when_requesting_half_then_half_is_kept() {
    let probe =
        StaticAcceleratorProbe::cpu_only().with_accelerator("Tesla V100-SXM2-16GB", 16 * GIB);

    let context = deriver(probe)
        .derive(DeviceRequest::Accelerator(0), Precision::Half, Some(4))
        .unwrap();

    assert_eq!(context.precision, Precision::Half);
    assert!(!context.device.forced_single_precision);
    assert_eq!(context.device.memory_gb, Some(16));
    assert_eq!(context.window, InferenceWindowConfig::HALF_PRECISION);
}

#[test]
fn given_small_accelerator_when_deriving_then_low_memory_window_is_used() {
    let probe = StaticAcceleratorProbe::cpu_only().with_accelerator("NVIDIA T400 4GB", 4 * GIB);

    let context = deriver(probe)
        .derive(DeviceRequest::Accelerator(0), Precision::Half, Some(2))
        .unwrap();

    assert_eq!(context.device.memory_gb, Some(4));
    assert_eq!(context.window, InferenceWindowConfig::LOW_MEMORY);
}

#[test]
fn given_second_accelerator_requested_when_deriving_then_that_device_is_profiled() {
    let probe = StaticAcceleratorProbe::cpu_only()
        .with_accelerator("NVIDIA GeForce GTX 1080", 8 * GIB)
        .with_accelerator("NVIDIA GeForce RTX 3090", 24 * GIB);

    let context = deriver(probe)
        .derive(DeviceRequest::Accelerator(1), Precision::Half, Some(2))
        .unwrap();

    assert_eq!(context.device.name.as_deref(), Some("NVIDIA GeForce RTX 3090"));
    assert_eq!(context.precision, Precision::Half);
}

#[test]
fn given_out_of_range_index_when_deriving_then_returns_invalid_device() {
    let probe = StaticAcceleratorProbe::cpu_only().with_accelerator("NVIDIA L4", 24 * GIB);

    let err = deriver(probe)
        .derive(DeviceRequest::Accelerator(3), Precision::Half, None)
        .unwrap_err();

    assert_eq!(err.index, 3);
    assert_eq!(err.available, 1);
}

#[test]
fn given_only_unified_memory_when_deriving_then_uses_it_with_requested_precision() {
    let probe = StaticAcceleratorProbe::cpu_only().with_unified_memory();

    let context = deriver(probe)
        .derive(DeviceRequest::Accelerator(0), Precision::Half, Some(8))
        .unwrap();

    assert_eq!(context.device.kind, DeviceKind::AppleAcceleratedGpu);
    assert_eq!(context.precision, Precision::Half);
    assert_eq!(context.device.memory_gb, None);
    assert_eq!(context.window, InferenceWindowConfig::HALF_PRECISION);
}

#[test]
fn given_no_accelerator_when_deriving_then_falls_back_to_cpu_single_precision() {
    let context = deriver(StaticAcceleratorProbe::cpu_only())
        .derive(DeviceRequest::Accelerator(0), Precision::Half, Some(8))
        .unwrap();

    assert_eq!(context.device.kind, DeviceKind::Cpu);
    assert_eq!(context.precision, Precision::Single);
    assert_eq!(context.window, InferenceWindowConfig::SINGLE_PRECISION);
}

#[test]
fn given_explicit_cpu_request_when_accelerator_present_then_cpu_is_used() {
    let probe = StaticAcceleratorProbe::cpu_only().with_accelerator("NVIDIA GeForce RTX 3090", 24 * GIB);

    let context = deriver(probe)
        .derive(DeviceRequest::Cpu, Precision::Half, Some(8))
        .unwrap();

    assert_eq!(context.device.kind, DeviceKind::Cpu);
    assert_eq!(context.precision, Precision::Single);
}

#[test]
fn given_no_thread_count_when_deriving_then_uses_logical_cores() {
    let context = deriver(StaticAcceleratorProbe::cpu_only())
        .derive(DeviceRequest::Cpu, Precision::Single, None)
        .unwrap();

    assert!(context.cpu_threads >= 1);
}

#[test]
fn given_derived_context_when_building_inference_params_then_context_fields_flow_through() {
    let context = deriver(StaticAcceleratorProbe::cpu_only())
        .derive(DeviceRequest::Cpu, Precision::Single, Some(6))
        .unwrap();

    let params = context.inference_params(&Default::default(), &Default::default());

    assert_eq!(params.device, DeviceKind::Cpu);
    assert_eq!(params.cpu_threads, 6);
    assert_eq!(params.window, context.window);
}

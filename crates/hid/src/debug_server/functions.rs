use hle_service::{FunctionInfo, HandlerFn};

use super::HidDebugServer;

/// Command table of the `hid:dbg` endpoint, in console order.
///
/// Id 2002 appears twice with different names. Which one the console
/// actually serves under that id is unresolved, so both rows are kept and
/// the endpoint builds them as ambiguous by default.
pub static HID_DEBUG_FUNCTIONS: &[FunctionInfo<HandlerFn<HidDebugServer>>] = &[
	FunctionInfo::unimplemented(0, "DeactivateDebugPad"),
	FunctionInfo::unimplemented(1, "SetDebugPadAutoPilotState"),
	FunctionInfo::unimplemented(2, "UnsetDebugPadAutoPilotState"),
	FunctionInfo::unimplemented(10, "DeactivateTouchScreen"),
	FunctionInfo::unimplemented(11, "SetTouchScreenAutoPilotState"),
	FunctionInfo::unimplemented(12, "UnsetTouchScreenAutoPilotState"),
	FunctionInfo::unimplemented(13, "GetTouchScreenConfiguration"),
	FunctionInfo::unimplemented(14, "ProcessTouchScreenAutoTune"),
	FunctionInfo::unimplemented(15, "ForceStopTouchScreenManagement"),
	FunctionInfo::unimplemented(16, "ForceRestartTouchScreenManagement"),
	FunctionInfo::unimplemented(17, "IsTouchScreenManaged"),
	FunctionInfo::unimplemented(20, "DeactivateMouse"),
	FunctionInfo::unimplemented(21, "SetMouseAutoPilotState"),
	FunctionInfo::unimplemented(22, "UnsetMouseAutoPilotState"),
	FunctionInfo::unimplemented(25, "SetDebugMouseAutoPilotState"),
	FunctionInfo::unimplemented(26, "UnsetDebugMouseAutoPilotState"),
	FunctionInfo::unimplemented(30, "DeactivateKeyboard"),
	FunctionInfo::unimplemented(31, "SetKeyboardAutoPilotState"),
	FunctionInfo::unimplemented(32, "UnsetKeyboardAutoPilotState"),
	FunctionInfo::unimplemented(50, "DeactivateXpad"),
	FunctionInfo::unimplemented(51, "SetXpadAutoPilotState"),
	FunctionInfo::unimplemented(52, "UnsetXpadAutoPilotState"),
	FunctionInfo::unimplemented(53, "DeactivateJoyXpad"),
	FunctionInfo::unimplemented(60, "ClearNpadSystemCommonPolicy"),
	FunctionInfo::unimplemented(61, "DeactivateNpad"),
	FunctionInfo::unimplemented(62, "ForceDisconnectNpad"),
	FunctionInfo::unimplemented(91, "DeactivateGesture"),
	FunctionInfo::unimplemented(110, "DeactivateHomeButton"),
	FunctionInfo::unimplemented(111, "SetHomeButtonAutoPilotState"),
	FunctionInfo::unimplemented(112, "UnsetHomeButtonAutoPilotState"),
	FunctionInfo::unimplemented(120, "DeactivateSleepButton"),
	FunctionInfo::unimplemented(121, "SetSleepButtonAutoPilotState"),
	FunctionInfo::unimplemented(122, "UnsetSleepButtonAutoPilotState"),
	FunctionInfo::unimplemented(123, "DeactivateInputDetector"),
	FunctionInfo::unimplemented(130, "DeactivateCaptureButton"),
	FunctionInfo::unimplemented(131, "SetCaptureButtonAutoPilotState"),
	FunctionInfo::unimplemented(132, "UnsetCaptureButtonAutoPilotState"),
	FunctionInfo::unimplemented(133, "SetShiftAccelerometerCalibrationValue"),
	FunctionInfo::unimplemented(134, "GetShiftAccelerometerCalibrationValue"),
	FunctionInfo::unimplemented(135, "SetShiftGyroscopeCalibrationValue"),
	FunctionInfo::unimplemented(136, "GetShiftGyroscopeCalibrationValue"),
	FunctionInfo::unimplemented(140, "DeactivateConsoleSixAxisSensor"),
	FunctionInfo::unimplemented(141, "GetConsoleSixAxisSensorSamplingFrequency"),
	FunctionInfo::unimplemented(142, "DeactivateSevenSixAxisSensor"),
	FunctionInfo::unimplemented(143, "GetConsoleSixAxisSensorCountStates"),
	FunctionInfo::unimplemented(144, "GetAccelerometerFsr"),
	FunctionInfo::unimplemented(145, "SetAccelerometerFsr"),
	FunctionInfo::unimplemented(146, "GetAccelerometerOdr"),
	FunctionInfo::unimplemented(147, "SetAccelerometerOdr"),
	FunctionInfo::unimplemented(148, "GetGyroscopeFsr"),
	FunctionInfo::unimplemented(149, "SetGyroscopeFsr"),
	FunctionInfo::unimplemented(150, "GetGyroscopeOdr"),
	FunctionInfo::unimplemented(151, "SetGyroscopeOdr"),
	FunctionInfo::unimplemented(152, "GetWhoAmI"),
	FunctionInfo::unimplemented(201, "ActivateFirmwareUpdate"),
	FunctionInfo::unimplemented(202, "DeactivateFirmwareUpdate"),
	FunctionInfo::unimplemented(203, "StartFirmwareUpdate"),
	FunctionInfo::unimplemented(204, "GetFirmwareUpdateStage"),
	FunctionInfo::unimplemented(205, "GetFirmwareVersion"),
	FunctionInfo::unimplemented(206, "GetDestinationFirmwareVersion"),
	FunctionInfo::unimplemented(207, "DiscardFirmwareInfoCacheForRevert"),
	FunctionInfo::unimplemented(208, "StartFirmwareUpdateForRevert"),
	FunctionInfo::unimplemented(209, "GetAvailableFirmwareVersionForRevert"),
	FunctionInfo::unimplemented(210, "IsFirmwareUpdatingDevice"),
	FunctionInfo::unimplemented(211, "StartFirmwareUpdateIndividual"),
	FunctionInfo::unimplemented(215, "SetUsbFirmwareForceUpdateEnabled"),
	FunctionInfo::unimplemented(216, "SetAllKuinaDevicesToFirmwareUpdateMode"),
	FunctionInfo::unimplemented(221, "UpdateControllerColor"),
	FunctionInfo::unimplemented(222, "ConnectUsbPadsAsync"),
	FunctionInfo::unimplemented(223, "DisconnectUsbPadsAsync"),
	FunctionInfo::unimplemented(224, "UpdateDesignInfo"),
	FunctionInfo::unimplemented(225, "GetUniquePadDriverState"),
	FunctionInfo::unimplemented(226, "GetSixAxisSensorDriverStates"),
	FunctionInfo::unimplemented(227, "GetRxPacketHistory"),
	FunctionInfo::unimplemented(228, "AcquireOperationEventHandle"),
	FunctionInfo::unimplemented(229, "ReadSerialFlash"),
	FunctionInfo::unimplemented(230, "WriteSerialFlash"),
	FunctionInfo::unimplemented(231, "GetOperationResult"),
	FunctionInfo::unimplemented(232, "EnableShipmentMode"),
	FunctionInfo::unimplemented(233, "ClearPairingInfo"),
	FunctionInfo::unimplemented(234, "GetUniquePadDeviceTypeSetInternal"),
	FunctionInfo::unimplemented(235, "EnableAnalogStickPower"),
	FunctionInfo::unimplemented(236, "RequestKuinaUartClockCal"),
	FunctionInfo::unimplemented(237, "GetKuinaUartClockCal"),
	FunctionInfo::unimplemented(238, "SetKuinaUartClockTrim"),
	FunctionInfo::unimplemented(239, "KuinaLoopbackTest"),
	FunctionInfo::unimplemented(240, "RequestBatteryVoltage"),
	FunctionInfo::unimplemented(241, "GetBatteryVoltage"),
	FunctionInfo::unimplemented(242, "GetUniquePadPowerInfo"),
	FunctionInfo::unimplemented(243, "RebootUniquePad"),
	FunctionInfo::unimplemented(244, "RequestKuinaFirmwareVersion"),
	FunctionInfo::unimplemented(245, "GetKuinaFirmwareVersion"),
	FunctionInfo::unimplemented(246, "GetVidPid"),
	FunctionInfo::unimplemented(247, "GetAnalogStickCalibrationValue"),
	FunctionInfo::unimplemented(248, "GetUniquePadIdsFull"),
	FunctionInfo::unimplemented(249, "ConnectUniquePad"),
	FunctionInfo::unimplemented(250, "IsVirtual"),
	FunctionInfo::unimplemented(251, "GetAnalogStickModuleParam"),
	FunctionInfo::unimplemented(301, "GetAbstractedPadHandles"),
	FunctionInfo::unimplemented(302, "GetAbstractedPadState"),
	FunctionInfo::unimplemented(303, "GetAbstractedPadsState"),
	FunctionInfo::unimplemented(321, "SetAutoPilotVirtualPadState"),
	FunctionInfo::unimplemented(322, "UnsetAutoPilotVirtualPadState"),
	FunctionInfo::unimplemented(323, "UnsetAllAutoPilotVirtualPadState"),
	FunctionInfo::unimplemented(324, "AttachHdlsWorkBuffer"),
	FunctionInfo::unimplemented(325, "ReleaseHdlsWorkBuffer"),
	FunctionInfo::unimplemented(326, "DumpHdlsNpadAssignmentState"),
	FunctionInfo::unimplemented(327, "DumpHdlsStates"),
	FunctionInfo::unimplemented(328, "ApplyHdlsNpadAssignmentState"),
	FunctionInfo::unimplemented(329, "ApplyHdlsStateList"),
	FunctionInfo::unimplemented(330, "AttachHdlsVirtualDevice"),
	FunctionInfo::unimplemented(331, "DetachHdlsVirtualDevice"),
	FunctionInfo::unimplemented(332, "SetHdlsState"),
	FunctionInfo::unimplemented(350, "AddRegisteredDevice"),
	FunctionInfo::unimplemented(400, "DisableExternalMcuOnNxDevice"),
	FunctionInfo::unimplemented(401, "DisableRailDeviceFiltering"),
	FunctionInfo::unimplemented(402, "EnableWiredPairing"),
	FunctionInfo::unimplemented(403, "EnableShipmentModeAutoClear"),
	FunctionInfo::unimplemented(404, "SetRailEnabled"),
	FunctionInfo::unimplemented(500, "SetFactoryInt"),
	FunctionInfo::unimplemented(501, "IsFactoryBootEnabled"),
	FunctionInfo::unimplemented(550, "SetAnalogStickModelDataTemporarily"),
	FunctionInfo::unimplemented(551, "GetAnalogStickModelData"),
	FunctionInfo::unimplemented(552, "ResetAnalogStickModelData"),
	FunctionInfo::unimplemented(600, "ConvertPadState"),
	FunctionInfo::unimplemented(650, "AddButtonPlayData"),
	FunctionInfo::unimplemented(651, "StartButtonPlayData"),
	FunctionInfo::unimplemented(652, "StopButtonPlayData"),
	FunctionInfo::unimplemented(2000, "DeactivateDigitizer"),
	FunctionInfo::unimplemented(2001, "SetDigitizerAutoPilotState"),
	FunctionInfo::unimplemented(2002, "UnsetDigitizerAutoPilotState"),
	FunctionInfo::unimplemented(2002, "ReloadFirmwareDebugSettings"),
];

use crate::eddystone::{encode_url, AdvertisingData};
use crate::error::{CommandFailure, Error, HciError};
use crate::hci::{HciCommand, HciTransport};
use std::time::Duration;

/// Time allowed for each controller command
pub const COMMAND_TIMEOUT: Duration = Duration::from_millis(1000);

/// Advertising state of the controller, as last driven by the beacon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeaconState {
    Disabled,
    Advertising(AdvertisingData),
}

/// Drives advertising on one controller
///
/// The controller is borrowed exclusively for the lifetime of the beacon, so
/// command sequences against one handle never interleave.
pub struct BeaconController<'a, T: HciTransport> {
    device: &'a mut T,
    state: BeaconState,
    timeout: Duration,
}

impl<'a, T: HciTransport> BeaconController<'a, T> {
    /// Creates a beacon for `device`, which must be available
    pub fn new(device: &'a mut T) -> Result<Self, Error> {
        if !device.is_available() {
            return Err(Error::DeviceUnavailable {
                dev_id: device.device_id(),
                source: HciError::NoDevice,
            });
        }

        Ok(Self {
            device,
            state: BeaconState::Disabled,
            timeout: COMMAND_TIMEOUT,
        })
    }

    /// Overrides the per-command timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn state(&self) -> &BeaconState {
        &self.state
    }

    /// Encodes `url` and starts advertising it
    ///
    /// Encoding errors are returned before any command reaches the controller.
    pub fn set_eddystone_url(&mut self, url: &str) -> Result<(), Error> {
        let payload = encode_url(url)?;
        let record = AdvertisingData::eddystone_url(&payload)?;
        log::debug!("eddystone-url {} -> {}", url, record);
        self.configure(record)
    }

    /// Stops advertising
    pub fn disable_advertising(&mut self) -> Result<(), Error> {
        self.clear()
    }

    /// Replaces the advertising data and (re)enables advertising
    ///
    /// Disable, set data and enable are all attempted even if one of them
    /// fails; failures are logged.
    pub fn configure(&mut self, record: AdvertisingData) -> Result<(), Error> {
        self.ensure_available()?;

        self.run(&HciCommand::LeSetAdvertisingEnable { enable: false });
        match HciCommand::le_set_advertising_data(record.as_bytes()) {
            Ok(command) => self.run(&command),
            Err(e) => report(command_failed("LE Set Advertising Data", None, e.into())),
        }
        self.run(&HciCommand::LeSetAdvertisingEnable { enable: true });

        log::info!("hci{}: advertising {} bytes", self.device.device_id(), record.len());
        self.state = BeaconState::Advertising(record);
        Ok(())
    }

    /// Disables advertising
    pub fn clear(&mut self) -> Result<(), Error> {
        self.ensure_available()?;

        self.run(&HciCommand::LeSetAdvertisingEnable { enable: false });

        log::info!("hci{}: advertising disabled", self.device.device_id());
        self.state = BeaconState::Disabled;
        Ok(())
    }

    fn ensure_available(&self) -> Result<(), Error> {
        if self.device.is_available() {
            Ok(())
        } else {
            Err(Error::DeviceUnavailable {
                dev_id: self.device.device_id(),
                source: HciError::NoDevice,
            })
        }
    }

    /// Issues one command, logging rather than returning a failure
    fn run(&mut self, command: &HciCommand) {
        if let Err(e) = self.execute(command) {
            report(e);
        }
    }

    fn execute(&mut self, command: &HciCommand) -> Result<(), Error> {
        match self.device.send_request(command, self.timeout) {
            Ok(0) => Ok(()),
            Ok(status) => Err(command_failed(command.name(), Some(status), CommandFailure::Status)),
            Err(e) => Err(command_failed(command.name(), None, e.into())),
        }
    }
}

fn command_failed(command: &'static str, status: Option<u8>, source: CommandFailure) -> Error {
    Error::ControllerCommandFailed {
        command,
        status,
        source,
    }
}

fn report(err: Error) {
    log::warn!("{}", err);
}

//! 核心服务
//!
//! 封装 shift-manager-core 的各种服务，
//! 把 Update 层产生的命令放到后台运行时执行

use std::sync::Arc;

use anyhow::Context;
use shift_manager_core::traits::ApiClient;
use shift_manager_core::{HttpApiClient, ScheduleTemplateService, ServiceContext, UserService};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::AppConfig;
use crate::message::{BackendCommand, BackendEvent};

/// TUI 核心服务
///
/// 持有后台运行时和服务上下文；查询缓存随上下文存活到程序退出
pub struct CoreService {
    runtime: Runtime,
    ctx: Arc<ServiceContext>,
    events_tx: UnboundedSender<BackendEvent>,
    events_rx: UnboundedReceiver<BackendEvent>,
}

impl CoreService {
    /// 按配置创建核心服务实例
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http_config = config.http_config()?;
        let api = HttpApiClient::new(http_config)?;
        Self::with_api(Arc::new(api))
    }

    /// 使用指定的 API 客户端创建
    pub fn with_api(api: Arc<dyn ApiClient>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("shift-manager-backend")
            .enable_all()
            .build()
            .context("failed to start the background runtime")?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            ctx: Arc::new(ServiceContext::new(api)),
            events_tx,
            events_rx,
        })
    }

    // ========== 服务 ==========

    fn templates(&self) -> ScheduleTemplateService {
        ScheduleTemplateService::new(self.ctx.clone())
    }

    fn users(&self) -> UserService {
        UserService::new(self.ctx.clone())
    }

    // ========== 命令 ==========

    /// 派发一个后台命令，结果稍后由 [`Self::try_recv`] 取回
    pub fn dispatch(&self, command: BackendCommand) {
        log::debug!("dispatch {command:?}");
        let tx = self.events_tx.clone();

        match command {
            BackendCommand::LoadMyInfo { cancel, refresh } => {
                let service = self.users();
                if refresh {
                    service.invalidate();
                }
                self.runtime.spawn(async move {
                    let result = service.my_info(&cancel).await;
                    let _ = tx.send(BackendEvent::MyInfoLoaded(result));
                });
            }
            BackendCommand::LoadTemplates { cancel, refresh } => {
                let service = self.templates();
                if refresh {
                    service.invalidate_list();
                }
                self.runtime.spawn(async move {
                    let result = service.list_schedule_templates(&cancel).await;
                    let _ = tx.send(BackendEvent::TemplatesLoaded(result));
                });
            }
            BackendCommand::LoadTemplate { id, cancel } => {
                let service = self.templates();
                self.runtime.spawn(async move {
                    let result = service.get_schedule_template(id, &cancel).await;
                    let _ = tx.send(BackendEvent::TemplateLoaded { id, result });
                });
            }
            BackendCommand::DeleteTemplate { id } => {
                let service = self.templates();
                self.runtime.spawn(async move {
                    let result = service.delete_schedule_template(id).await;
                    let _ = tx.send(BackendEvent::TemplateDeleted { id, result });
                });
            }
        }
    }

    /// 非阻塞地取回一个后台结果
    pub fn try_recv(&mut self) -> Option<BackendEvent> {
        self.events_rx.try_recv().ok()
    }
}

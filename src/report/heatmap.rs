// ==========================================
// 采购请求数据生成系统 - 相关性热力图渲染
// ==========================================
// 职责: 将相关性矩阵渲染为 PNG 热力图
// 覆盖语义: 目标文件直接覆盖, 最近一次运行完整替换既有图像
// 说明: 单元格颜色编码 [-1,1] 区间, 具体尺寸与配色为展示层约定
// ==========================================

use crate::report::correlation::CorrelationMatrix;
use crate::report::error::ReportError;
use plotters::prelude::*;
use std::path::Path;

/// 单元格边长 (像素)
const CELL_SIZE: u32 = 48;

/// 图像外边距 (像素)
const MARGIN: u32 = 40;

/// 色标条宽度 (像素)
const LEGEND_WIDTH: u32 = 24;

/// 色标条与矩阵的间距 (像素)
const LEGEND_GAP: u32 = 32;

/// 将相关性矩阵渲染为热力图 PNG
///
/// # 失败模式
/// - 矩阵为空: EmptyDataset
/// - 目标目录不存在或不可写: Render
pub fn render_heatmap(matrix: &CorrelationMatrix, path: &Path) -> Result<(), ReportError> {
    let n = matrix.labels.len() as u32;
    if n == 0 {
        return Err(ReportError::EmptyDataset);
    }

    let width = MARGIN * 2 + n * CELL_SIZE + LEGEND_GAP + LEGEND_WIDTH;
    let height = MARGIN * 2 + n * CELL_SIZE;

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ReportError::Render(e.to_string()))?;

    // 矩阵单元格
    for (i, row) in matrix.values.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let x0 = (MARGIN + j as u32 * CELL_SIZE) as i32;
            let y0 = (MARGIN + i as u32 * CELL_SIZE) as i32;
            let x1 = x0 + CELL_SIZE as i32;
            let y1 = y0 + CELL_SIZE as i32;

            root.draw(&Rectangle::new(
                [(x0, y0), (x1, y1)],
                cell_color(value).filled(),
            ))
            .map_err(|e| ReportError::Render(e.to_string()))?;
        }
    }

    // 右侧色标条: 自上 (+1) 至下 (-1) 的渐变
    let legend_x0 = (MARGIN + n * CELL_SIZE + LEGEND_GAP) as i32;
    let legend_height = n * CELL_SIZE;
    for step in 0..legend_height {
        let value = 1.0 - 2.0 * f64::from(step) / f64::from(legend_height.max(1));
        let y = (MARGIN + step) as i32;
        root.draw(&Rectangle::new(
            [
                (legend_x0, y),
                (legend_x0 + LEGEND_WIDTH as i32, y + 1),
            ],
            cell_color(value).filled(),
        ))
        .map_err(|e| ReportError::Render(e.to_string()))?;
    }

    root.present()
        .map_err(|e| ReportError::Render(e.to_string()))?;

    Ok(())
}

/// 相关系数到颜色: 蓝 (-1) - 白 (0) - 红 (+1), NaN 渲染为灰色
fn cell_color(value: f64) -> RGBColor {
    if value.is_nan() {
        return RGBColor(200, 200, 200);
    }

    let v = value.clamp(-1.0, 1.0);
    if v < 0.0 {
        // 蓝 -> 白
        let t = v + 1.0;
        RGBColor(lerp(59, 255, t), lerp(76, 255, t), lerp(192, 255, t))
    } else {
        // 白 -> 红
        RGBColor(lerp(255, 180, v), lerp(255, 4, v), lerp(255, 38, v))
    }
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

//! 终端会话界面 - 渲染消息、接收输入、驱动回合管道
//!
//! 一次只处理一个回合：上一个回合完成或失败之前不接收新输入。

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::config::Config;
use crate::pipeline::{SessionContext, TurnOutcome, handle_turn};
use crate::transcript::{NO_MATCHES_WARNING, RESTART_GREETING, WELCOME_GREETING};
use crate::types::ResultSet;

/// 表格单元格的最大显示宽度
const MAX_CELL_WIDTH: usize = 28;

/// 启动一个会话并进入回合循环
pub async fn launch(config: &Config) -> Result<()> {
    let mut config = config.clone();

    // 凭据缺失时退回交互式输入
    if config.llm.api_key.is_empty() {
        config.llm.api_key = prompt_for_secret("Enter your LLM API key: ")?;
    }
    if config.llm.api_key.is_empty() {
        anyhow::bail!("An LLM API key is required to start a session");
    }

    let context = SessionContext::new(config)?;
    context.check_connection().await?;

    print_banner();
    println!("🦉 {}\n", WELCOME_GREETING);

    let stdin = io::stdin();
    loop {
        print!("👤 > ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/reset" => {
                context.transcript.write().await.reset();
                println!("\n🦉 {}\n", RESTART_GREETING);
                continue;
            }
            _ => {}
        }

        match handle_turn(&context, input).await {
            Ok(TurnOutcome::Chat(reply)) => {
                println!("\n🦉 {}\n", reply);
            }
            Ok(TurnOutcome::Answer {
                summary, results, ..
            }) => {
                println!("✅ Found them!");
                println!("\n🦉 {}\n", summary);
                println!("{}", render_table(&results));
            }
            Ok(TurnOutcome::NoMatches) => {
                println!("❌ No matches found");
                println!("\n🦉 {}\n", NO_MATCHES_WARNING);
            }
            Err(e) => {
                // 搜索分支的失败在此展示，回合结束，历史不追加
                eprintln!("⚠️ Oops, something went wrong");
                eprintln!("Error details: {}\n", e);
            }
        }
    }

    println!("🦉 Good luck with your search!");
    Ok(())
}

fn print_banner() {
    println!("==============================================");
    println!("  OWLSCOUT — AI College Search Engine");
    println!("==============================================");
    println!("  1. Introduce yourself! Tell me your name, where you live, or what grade you are in.");
    println!("  2. Share your goals. What do you want to study? Do you have a dream city?");
    println!("  3. Get specific. Mention your SAT score or budget to find the best matches.");
    println!();
    println!("  Commands: /reset starts over, /quit leaves.");
    println!("==============================================\n");
}

/// 从标准输入读取一个密钥值
fn prompt_for_secret(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 把完整结果集渲染为等宽对齐的文本表格。NULL渲染为空
pub fn render_table(results: &ResultSet) -> String {
    let widths: Vec<usize> = results
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let cells_max = (0..results.len())
                .map(|row| cell_text(results, row, i).chars().count())
                .max()
                .unwrap_or(0);
            column.chars().count().max(cells_max)
        })
        .collect();

    let mut out = String::new();

    let header: Vec<String> = results
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| format!("{:<width$}", column, width = *width))
        .collect();
    out.push_str(&header.join("  "));
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    for row in 0..results.len() {
        let cells: Vec<String> = (0..results.columns.len())
            .zip(&widths)
            .map(|(i, width)| format!("{:<width$}", cell_text(results, row, i), width = *width))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out
}

fn cell_text(results: &ResultSet, row: usize, column_index: usize) -> String {
    let column = &results.columns[column_index];
    let value = results.value(row, column).unwrap_or("");
    if value.chars().count() > MAX_CELL_WIDTH {
        let truncated: String = value.chars().take(MAX_CELL_WIDTH - 1).collect();
        format!("{}…", truncated)
    } else {
        value.to_string()
    }
}

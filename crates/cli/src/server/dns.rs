use naptr_lb_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{error, info};

pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = Arc::new(create_udp_socket(socket_addr)?);

    info!(bind_address = %socket_addr, "DNS server ready");

    run_udp_loop(socket, Arc::new(handler)).await;
    Ok(())
}

async fn run_udp_loop(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; 4096];

    loop {
        match socket.recv_from(&mut recv_buf).await {
            Ok((n, from)) => {
                let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
                let handler = handler.clone();
                let socket = socket.clone();
                tokio::spawn(async move {
                    handler.handle_datagram(socket, &owned_buf, from).await;
                });
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            // ICMP port unreachable from a previous reply surfaces here on some platforms
            Err(e) if e.kind() == io::ErrorKind::ConnectionReset => continue,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                break;
            }
        }
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
